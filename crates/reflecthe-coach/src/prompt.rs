use reflecthe_core::content;
use reflecthe_core::AdviceRequest;

/// Render the fifteen-code PSF 2023 taxonomy as compact prompt context.
pub fn serialize_taxonomy() -> String {
    let mut out = String::with_capacity(1024);
    for (family, dimensions) in content::psf_families() {
        out.push_str(family);
        out.push_str(":\n");
        for dim in dimensions {
            out.push_str("  ");
            out.push_str(dim.code);
            out.push_str(" — ");
            out.push_str(dim.title);
            out.push('\n');
        }
    }
    out
}

pub fn system_prompt() -> String {
    format!(
        "You are an Educational Developer and PSF 2023 Coach. You critique reflective \
drafts written by higher-education staff for Advance HE Fellowship claims.\n\n\
INSTRUCTIONS:\n\
1. Act as a coach. Critically analyse the depth of reflection using models like \
Gibbs, Brookfield, Schön, Rolfe, or Kolb.\n\
2. Identify specific PSF 2023 Dimension codes (A1-5, K1-5, V1-5) that are currently \
evidenced in the draft, and flag ones that are missing.\n\
3. CRITICAL: DO NOT rewrite the user's sentences or provide a \"corrected\" version. \
Focus solely on critique and coaching.\n\
4. Provide specific suggestions on how to deepen the reflection to meet PSF standards.\n\
5. Use British English spelling (e.g. analyse, realisation, programme).\n\n\
PSF 2023 Context:\n{}\n\
Respond with ONLY a JSON object with exactly these keys:\n\
{{\n\
  \"analysis\": \"A critical critique of the reflection depth and alignment with the user's role.\",\n\
  \"tips\": [\"A list of specific PSF dimension codes present or missing, each with a short justification\"],\n\
  \"questions\": [\"3-4 deep coaching questions based on reflective models to help the user think further.\"]\n\
}}\n\
Output ONLY the JSON object, nothing else.",
        serialize_taxonomy()
    )
}

pub fn user_message(request: &AdviceRequest) -> String {
    format!(
        "USER ROLE/DISCIPLINE: {}\nUSER REFLECTION DRAFT: {}",
        request.role(),
        request.experience()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> AdviceRequest {
        AdviceRequest::new("Senior Lecturer", "I ran a seminar that went badly.").unwrap()
    }

    #[test]
    fn taxonomy_lists_all_fifteen_codes() {
        let rendered = serialize_taxonomy();
        for prefix in ["A", "K", "V"] {
            for n in 1..=5 {
                assert!(rendered.contains(&format!("{prefix}{n}")), "missing {prefix}{n}");
            }
        }
    }

    #[test]
    fn system_prompt_carries_the_coaching_mandates() {
        let prompt = system_prompt();
        assert!(prompt.contains("DO NOT rewrite"));
        assert!(prompt.contains("British English"));
        assert!(prompt.contains("Gibbs"));
        assert!(prompt.contains("Brookfield"));
        assert!(prompt.contains("Schön"));
        assert!(prompt.contains("\"analysis\""));
        assert!(prompt.contains("\"tips\""));
        assert!(prompt.contains("\"questions\""));
        // Embedded taxonomy
        assert!(prompt.contains("Critical evaluation as a basis for effective practice"));
    }

    #[test]
    fn user_message_interpolates_role_and_draft() {
        let msg = user_message(&request());
        assert!(msg.contains("Senior Lecturer"));
        assert!(msg.contains("I ran a seminar that went badly."));
    }

    #[test]
    fn prompt_building_is_pure() {
        assert_eq!(system_prompt(), system_prompt());
        assert_eq!(user_message(&request()), user_message(&request()));
    }
}
