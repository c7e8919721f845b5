// Resume extraction prompt template.
// The {resume_text} placeholder is substituted before each call.

pub const RESUME_PARSE_PROMPT: &str = r#"You are an expert resume parser. Based on the resume text provided below, extract the information and generate a single JSON object that strictly follows the structure provided.

**JSON STRUCTURE TO FOLLOW:**
{
    "name": "The full name of the candidate",
    "email": "The candidate's email address",
    "phone": "The candidate's phone number",
    "summary": "A brief professional summary from the resume",
    "experience": [
        {
            "title": "Job title",
            "company": "Company name",
            "date": "Dates of employment",
            "description": "A summary of responsibilities and achievements"
        }
    ],
    "education": [
        {
            "degree": "Degree or certificate name",
            "institution": "Name of the school or institution",
            "date": "Dates of attendance"
        }
    ],
    "skills": ["A list of skills, e.g., 'Python', 'Project Management'"]
}

**IMPORTANT RULES:**
- You MUST only respond with the single JSON object. Do not add any introductory text, explanations, or markdown formatting like ```json.
- The 'experience' and 'education' fields MUST be arrays (lists) of objects, even if only one item is found for each.
- Be extremely careful with spelling and numbers. Extract information as accurately as possible, preferring to copy it verbatim.
- If a specific piece of information is not found in the resume, use "Not specified" for string fields or an empty list `[]` for arrays like 'skills', 'experience', or 'education'.

**RESUME TEXT TO PARSE:**
---
{resume_text}
---

Now, provide the JSON object."#;
