//! Where the editor reports to.

use serde_json::Value;

/// Output side of the form: a status line and a preview of the pending record.
pub trait Surface {
    fn status(&mut self, message: &str);

    fn preview(&mut self, preview: &Value);
}
