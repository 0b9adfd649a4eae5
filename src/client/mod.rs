mod enrich;
pub mod error;
pub mod fake;
pub mod http;
pub mod query;
pub mod transport;

pub use error::ClientError;
pub use fake::FakeTransport;
pub use http::{HttpTransport, BOKO_API_URL};
pub use query::{GraphQlRequest, Variables, ATTENDANCE_QUERY, SEGMENTS_QUERY};
pub use transport::Transport;
