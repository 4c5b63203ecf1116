//! Property-based tests for senwork
//!
//! Random inputs checked against the guard and decoding invariants.

#[cfg(test)]
mod tests {
    use crate::guards::{is_skill, parse_api_response, parse_guarded};
    use crate::types::{ContactForm, Skill};
    use proptest::prelude::*;
    use serde_json::{Value, json};

    // ===== Strategy Generators =====

    fn arb_text() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 ]{0,40}"
    }

    fn skill_json(proficiency: i64) -> Value {
        json!({"name": "Go", "category": "Backend", "proficiency": proficiency})
    }

    // ===== Skill guard properties =====

    proptest! {
        /// Any integer in 0..=100 is accepted
        #[test]
        fn prop_skill_accepts_range(proficiency in 0i64..=100) {
            prop_assert!(is_skill(&skill_json(proficiency)));
        }

        /// Integers outside 0..=100 are rejected
        #[test]
        fn prop_skill_rejects_out_of_range(
            proficiency in prop_oneof![i64::MIN..0i64, 101i64..i64::MAX]
        ) {
            prop_assert!(!is_skill(&skill_json(proficiency)));
        }

        /// Fractional proficiencies are rejected
        #[test]
        fn prop_skill_rejects_fractions(whole in 0u32..100, frac in 0.01f64..0.99) {
            let value = json!({
                "name": "Go",
                "category": "Backend",
                "proficiency": f64::from(whole) + frac,
            });
            prop_assert!(!is_skill(&value));
        }

        /// A guarded skill always decodes with the same proficiency
        #[test]
        fn prop_guarded_skill_decodes(proficiency in 0u8..=100, name in arb_text()) {
            let body = json!({
                "success": true,
                "data": {"name": name.clone(), "category": "Backend", "proficiency": proficiency}
            });
            let skill: Skill = parse_guarded(&body).expect("guarded skill should decode");
            prop_assert_eq!(skill.proficiency, proficiency);
            prop_assert_eq!(skill.name, name);
        }

        /// A failure envelope never yields data, whatever it carries
        #[test]
        fn prop_failure_envelope_is_none(error in arb_text(), proficiency in 0i64..=100) {
            let body = json!({
                "success": false,
                "data": skill_json(proficiency),
                "error": error,
            });
            prop_assert!(parse_api_response::<Skill, _>(&body, is_skill).is_none());
        }

        /// Contact forms survive an encode/decode cycle unchanged
        #[test]
        fn prop_contact_form_wire_shape(
            name in arb_text(),
            subject in arb_text(),
            message in arb_text(),
        ) {
            let form = ContactForm::new(name, "a@b.co", subject, message);
            let value = serde_json::to_value(&form).unwrap();
            prop_assert!(crate::guards::is_contact_form(&value));
            let decoded: ContactForm = serde_json::from_value(value).unwrap();
            prop_assert_eq!(decoded, form);
        }
    }
}
