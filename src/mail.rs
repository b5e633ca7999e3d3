//! Extraction of the subject and plain-text body from a raw mail message.
//!
//! Uses the `mailparse` crate for MIME parsing, so transfer encodings
//! (quoted-printable, base64) and charsets are decoded before the body
//! reaches the patch recognizer.

use crate::error::{MailPatchError, Result};
use mailparse::{DispositionType, MailHeaderMap, ParsedMail, parse_mail};

/// The parts of a mail message the converter needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    /// Decoded `Subject` header, empty when absent.
    pub subject: String,
    /// Decoded body of the first inline `text/plain` part.
    pub body: String,
}

impl MailMessage {
    /// Parse a raw RFC 822 / MIME message.
    ///
    /// # Returns
    ///
    /// * `Ok(MailMessage)` - Subject and decoded text body
    /// * `Err(MailPatchError::MailError)` - Unparseable message or no text body
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let parsed = parse_mail(raw)?;

        let subject = parsed
            .headers
            .get_first_value("Subject")
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        let part = find_text_part(&parsed).ok_or_else(|| {
            MailPatchError::MailError("message has no text/plain part".to_string())
        })?;
        let body = part.get_body()?;

        Ok(Self { subject, body })
    }
}

/// Depth-first search for the first inline `text/plain` part.
fn find_text_part<'a>(part: &'a ParsedMail<'a>) -> Option<&'a ParsedMail<'a>> {
    if part.subparts.is_empty() {
        let inline = part.get_content_disposition().disposition != DispositionType::Attachment;
        let plain = part.ctype.mimetype.eq_ignore_ascii_case("text/plain");
        return (inline && plain).then_some(part);
    }

    part.subparts.iter().find_map(find_text_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_message() {
        let raw = b"From: Dev <dev@example.com>\r\n\
Subject: [PATCH 1/2] Fix build\r\n\
\r\n\
diff --git a/x b/x\r\n";

        let mail = MailMessage::parse(raw).unwrap();

        assert_eq!(mail.subject, "[PATCH 1/2] Fix build");
        assert!(mail.body.starts_with("diff --git a/x b/x"));
    }

    #[test]
    fn test_parse_decodes_quoted_printable_and_subject() {
        let raw = b"Subject: [PATCH] =?UTF-8?Q?Caf=C3=A9?= fix\r\n\
Content-Type: text/plain; charset=utf-8\r\n\
Content-Transfer-Encoding: quoted-printable\r\n\
\r\n\
=C2=A0int a;\r\n";

        let mail = MailMessage::parse(raw).unwrap();

        assert_eq!(mail.subject, "[PATCH] Caf\u{e9} fix");
        assert!(mail.body.starts_with("\u{a0}int a;"));
    }

    #[test]
    fn test_parse_multipart_picks_text_part() {
        let raw = b"Subject: [PATCH] Multi\r\n\
Content-Type: multipart/alternative; boundary=\"XX\"\r\n\
\r\n\
--XX\r\n\
Content-Type: text/html\r\n\
\r\n\
<p>html</p>\r\n\
--XX\r\n\
Content-Type: text/plain\r\n\
\r\n\
plain body\r\n\
--XX--\r\n";

        let mail = MailMessage::parse(raw).unwrap();

        assert_eq!(mail.subject, "[PATCH] Multi");
        assert!(mail.body.starts_with("plain body"));
    }

    #[test]
    fn test_parse_without_text_part_fails() {
        let raw = b"Subject: pic\r\n\
Content-Type: image/png\r\n\
\r\n\
abc\r\n";

        let err = MailMessage::parse(raw).unwrap_err();
        assert!(matches!(err, MailPatchError::MailError(_)));
    }

    #[test]
    fn test_missing_subject_is_empty() {
        let raw = b"From: dev@example.com\r\n\r\nbody\r\n";

        let mail = MailMessage::parse(raw).unwrap();
        assert_eq!(mail.subject, "");
    }
}
