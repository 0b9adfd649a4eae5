use tracing::debug;

use crate::client::error::ClientError;
use crate::client::query::{decode_collection, GraphQlRequest};
use crate::client::transport::Transport;
use crate::model::{Attendance, Marathon, Segment};

impl Marathon {
    /// Replace `attendance` with the marathon's attendance as reported by the API.
    ///
    /// One request is made. The field is only assigned once the whole
    /// response has decoded, so on error (or if the future is dropped) the
    /// previous attendance is left in place.
    pub async fn get_attendees<T>(&mut self, transport: &T) -> Result<(), ClientError>
    where
        T: Transport + ?Sized,
    {
        debug!("Fetching attendance for marathon {}", self.id);
        let response = transport.execute(&GraphQlRequest::attendance(self.id)).await?;
        let attendance = decode_collection::<Attendance>(&response, "attendance")?;

        debug!(
            "Replacing attendance for marathon {} with {} entries",
            self.id,
            attendance.len()
        );
        self.attendance = attendance;
        Ok(())
    }

    /// Replace `segments` with the marathon's segments as reported by the API.
    ///
    /// Same request/replace contract as [`Marathon::get_attendees`].
    pub async fn get_segments<T>(&mut self, transport: &T) -> Result<(), ClientError>
    where
        T: Transport + ?Sized,
    {
        debug!("Fetching segments for marathon {}", self.id);
        let response = transport.execute(&GraphQlRequest::segments(self.id)).await?;
        let segments = decode_collection::<Segment>(&response, "segments")?;

        debug!(
            "Replacing segments for marathon {} with {} entries",
            self.id,
            segments.len()
        );
        self.segments = segments;
        Ok(())
    }
}
