use super::{FieldErrors, FormPayload};

/// Client-supplied customer fields, validated. The identifier is
/// store-assigned and never read from the submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerPayload {
    pub name: String,
    pub email: String,
    /// Picture URL or path; stored as the customer's `image_url`.
    pub picture: String,
}

impl CustomerPayload {
    /// Validate a raw submission. Every rule runs, so all violated fields
    /// are reported together.
    pub fn parse(form: &FormPayload) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = super::non_empty(form, "name", "Please enter customer name.", &mut errors);
        let email = super::email(form, "email", "Please enter customer email.", &mut errors);
        let picture = super::non_empty(
            form,
            "picture",
            "Please enter customer picture URL.",
            &mut errors,
        );

        match (name, email, picture) {
            (Some(name), Some(email), Some(picture)) => Ok(Self {
                name,
                email,
                picture,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CustomerPayload;
    use crate::forms::tests::form;

    #[test]
    fn parses_a_valid_submission() {
        let payload = CustomerPayload::parse(&form(&[
            ("name", "Amy Burns"),
            ("email", "amy@example.com"),
            ("picture", "/customers/amy-burns.png"),
        ]))
        .expect("valid submission");

        assert_eq!(payload.name, "Amy Burns");
        assert_eq!(payload.email, "amy@example.com");
        assert_eq!(payload.picture, "/customers/amy-burns.png");
    }

    #[test]
    fn rejects_text_that_is_not_email_shaped() {
        for bad in ["not-an-email", "user@", "@example.com", "user@example", "a b@example.com"] {
            let errors = CustomerPayload::parse(&form(&[
                ("name", "Amy Burns"),
                ("email", bad),
                ("picture", "/p.png"),
            ]))
            .expect_err("email should be rejected");
            assert_eq!(
                errors.messages("email"),
                ["Please enter customer email."],
                "email {bad:?}"
            );
        }
    }

    #[test]
    fn reports_every_missing_field_in_one_pass() {
        let errors = CustomerPayload::parse(&form(&[("name", "  ")])).expect_err("blank submission");

        assert_eq!(errors.messages("name"), ["Please enter customer name."]);
        assert_eq!(errors.messages("email"), ["Please enter customer email."]);
        assert_eq!(errors.messages("picture"), ["Please enter customer picture URL."]);
        assert_eq!(errors.fields().count(), 3);
    }
}
