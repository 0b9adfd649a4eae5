use serde_json::{json, Value};

/// Check if a test is enabled via environment variable
fn is_test_enabled(env_var: &str) -> bool {
    std::env::var(env_var)
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false)
}

/// Check if tests against the live API are enabled via environment variable
pub fn is_remote_enabled() -> bool {
    is_test_enabled("ENABLE_REMOTE_TESTS")
}

/// Marathon used by live tests, overridable with `LIVE_MARATHON_ID`
pub fn live_marathon_id() -> i64 {
    std::env::var("LIVE_MARATHON_ID")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1)
}

/// A marathon payload with every scalar set, a charity, and no collections
pub fn marathon_json(id: i64) -> Value {
    json!({
        "id": id,
        "type": "marathon",
        "type_id": 3,
        "slug": "zfg-2021",
        "full_name": "Zelda Fundraiser 2021",
        "total": "12345.67",
        "start_date": "2021-01-02T03:04:05.000000Z",
        "stop_date": "2021-01-05T22:00:00.500000Z",
        "playlist": "PL123",
        "charity": charity_json(),
    })
}

pub fn charity_json() -> Value {
    json!({
        "id": 7,
        "slug": "cancer-research",
        "full_name": "Cancer Research Institute",
        "website": "https://example.org",
        "total": 12345.67,
    })
}

pub fn attendee_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "twitch_login": name.to_lowercase(),
        "rank": 2,
        "house": "Courage",
        "house_color": "#00ff00",
    })
}

/// A segment payload shaped like the segments query returns it
pub fn segment_json(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "game": {
            "id": 100 + id,
            "title": title,
            "isZelda": true,
            "isEvent": false,
        },
        "modifier": "100%",
        "raised": 250.5,
        "start_time": "2021-01-02T04:00:00.000000Z",
        "end_time": "2021-01-02T06:30:00.000000Z",
        "vod": "https://example.org/vod",
        "time_offset": "1h2m3s",
        "runners": [
            { "attendee": attendee_json(11, "Runner"), "runner_rank": 1 },
        ],
        "filenames": [
            { "filename": format!("segment-{}.mp4", id), "note": "part 1" },
        ],
    })
}
