//! Adoption requests and the mail composer they are handed to.

use anyhow::{Context, Result};

use crate::models::CatalogEntry;

/// Address every adoption request goes to.
pub const ADOPTION_RECIPIENT: &str = "hello@izadi.xyz";
/// Body text pre-filled in every adoption request.
pub const ADOPTION_BODY: &str =
    "the doggo is so cute 🥺, i want to adopt him, i promise i will take good care uwu.";

/// Fields of a pre-filled mail draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailRequest {
    pub recipients: Vec<String>,
    pub subject: String,
    pub body: String,
}

impl MailRequest {
    /// Draft asking to adopt `entry`.
    pub fn adoption(entry: &CatalogEntry) -> Self {
        Self {
            recipients: vec![ADOPTION_RECIPIENT.to_string()],
            subject: format!("i want to shibadopt {}!", entry.name),
            body: ADOPTION_BODY.to_string(),
        }
    }

    /// Encode the draft as a `mailto:` URI. Subject and body are
    /// percent-encoded; recipients are joined with commas.
    pub fn to_mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipients.join(","),
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

/// Whatever opens a draft for the user. Callers do not observe anything
/// past the hand-off.
pub trait MailComposer {
    fn compose(&self, request: &MailRequest) -> Result<()>;
}

/// Opens the draft in the platform's `mailto:` handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemMailComposer;

impl MailComposer for SystemMailComposer {
    fn compose(&self, request: &MailRequest) -> Result<()> {
        open::that(request.to_mailto_uri()).context("failed to open the mail composer")
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use anyhow::anyhow;

    use super::*;
    use crate::catalog::Catalog;

    /// Composer double that records every request it receives.
    #[derive(Default, Clone)]
    pub(crate) struct RecordingComposer {
        pub(crate) sent: Rc<RefCell<Vec<MailRequest>>>,
        pub(crate) fail: bool,
    }

    impl MailComposer for RecordingComposer {
        fn compose(&self, request: &MailRequest) -> Result<()> {
            if self.fail {
                return Err(anyhow!("no mail client configured"));
            }
            self.sent.borrow_mut().push(request.clone());
            Ok(())
        }
    }

    #[test]
    fn adoption_subject_interpolates_the_name() {
        let catalog = Catalog::shibas();
        let kotaro = catalog.get(0).unwrap();
        let request = MailRequest::adoption(kotaro);

        assert_eq!(request.subject, "i want to shibadopt Kotaro!");
        assert_eq!(request.recipients, vec!["hello@izadi.xyz".to_string()]);
        assert_eq!(request.body, ADOPTION_BODY);
    }

    #[test]
    fn mailto_uri_percent_encodes_fields() {
        let catalog = Catalog::shibas();
        let request = MailRequest::adoption(catalog.get(0).unwrap());
        let uri = request.to_mailto_uri();

        assert!(uri.starts_with("mailto:hello@izadi.xyz?subject="));
        assert!(uri.contains("subject=i%20want%20to%20shibadopt%20Kotaro%21"));
        assert!(uri.contains("&body=the%20doggo%20is%20so%20cute%20"));
        assert!(!uri.contains(' '));
    }

    #[test]
    fn mailto_uri_joins_recipients() {
        let request = MailRequest {
            recipients: vec!["a@example.com".into(), "b@example.com".into()],
            subject: "hi".into(),
            body: "there".into(),
        };
        assert_eq!(
            request.to_mailto_uri(),
            "mailto:a@example.com,b@example.com?subject=hi&body=there"
        );
    }

    #[test]
    fn recording_composer_captures_requests() {
        let composer = RecordingComposer::default();
        let catalog = Catalog::shibas();
        let request = MailRequest::adoption(catalog.get(3).unwrap());

        composer.compose(&request).unwrap();

        assert_eq!(composer.sent.borrow().as_slice(), &[request]);
    }
}
