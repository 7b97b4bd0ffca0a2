use crate::types::*;

const PERSONA: &str = r#"You are "Classroom Catalyst," an expert AI instructional designer for teachers in India, with a deep understanding of 2025 youth culture."#;

const ASSISTANT_PERSONA: &str = r#"You are "Classroom Catalyst," an expert AI assistant."#;

const GRADE_RULE: &str = "**Grade Level Adaptation (CRITICAL):** Adapt all content to the specified grade level (e.g., simple stories for Grades 1-5, relatable caselets for Grades 6-10, career focus for Grades 11-12, sophisticated discussions for MBA).";

const LOCATION_RULE: &str = "**Local & Cultural Relevance (CRITICAL):** Weave in specific, familiar, and current local references based on the provided location.";

pub fn lesson_plan_prompt(req: &GenerationRequest, duration: u32) -> String {
    format!(
        r#####"{PERSONA} Your task is to create a complete, timed, and engaging lesson plan.

**Core Instructions:**
1.  **Structure as a Lesson Plan:** Create a timed agenda based on the {duration}-minute duration.
2.  {GRADE_RULE}
3.  {LOCATION_RULE}
4.  **Resource Hub:** As the final card, always include a "#### Suggested Resources" card. Provide 2-3 clickable, real, and relevant links (e.g., to YouTube videos, educational websites like PhET, or news articles) that supplement the lesson. Format links as standard markdown: [Link Text](URL).
5.  **Output Formatting:** Structure the response as a single text block. Start with "{title} Lesson Plan: [Topic]". Then, for each segment and asset, use "{title} [Title]". Separate each distinct part with the delimiter: "{card_break}".

---
**Teacher's Request:**
- **Class/Grade:** {grade}
- **Topic:** {topic}
- **Total Class Duration:** {duration} minutes
- **Lesson Context:** {context}
- **Location for Nuances:** {location}
- **Assets to Include:** {assets}
---

Generate the complete lesson plan now.
"#####,
        title = TITLE_PREFIX,
        card_break = CARD_BREAK,
        grade = req.grade,
        topic = req.topic,
        context = req.context,
        location = req.location,
        assets = req.asset_types().join(", "),
    )
}

pub fn asset_list_prompt(req: &GenerationRequest) -> String {
    let duration_line = req
        .duration
        .map(|d| format!("- **Total Class Duration:** {d} minutes\n"))
        .unwrap_or_default();

    format!(
        r#"{PERSONA} Your task is to create engaging, ready-to-use classroom assets.

**Core Instructions:**
1.  {GRADE_RULE}
2.  {LOCATION_RULE}
3.  **One Card per Asset:** Create exactly one asset for each requested asset type, in the order given.
4.  **Output Formatting:** Structure the response as a single text block. Start every asset with "{title} [Title]". Separate each asset with the delimiter: "{card_break}".

---
**Teacher's Request:**
- **Class/Grade:** {grade}
- **Topic:** {topic}
{duration_line}- **Lesson Context:** {context}
- **Location for Nuances:** {location}
- **Assets to Include:** {assets}
---

Generate the assets now.
"#,
        title = TITLE_PREFIX,
        card_break = CARD_BREAK,
        grade = req.grade,
        topic = req.topic,
        context = req.context,
        location = req.location,
        assets = req.asset_types().join(", "),
    )
}

pub fn remix_prompt(req: &CardRequest) -> String {
    format!(
        r#"{ASSISTANT_PERSONA} A teacher wants a different version of an asset they just generated.

**Original Asset to Remix:**
- Title: {card_title}
- Content: {card_content}

**Context:**
- Class/Grade: {grade}
- Topic: {topic}
- Location: {location}

**Your Task:**
Generate a single, new, and creatively different version of this asset. It must serve the same purpose (e.g., if it's a Fun Fact, generate a new Fun Fact) but take a completely different angle. Maintain the same grade-level and local context. Format the output with a "{title} {card_title}" heading. Return only this one asset with no separators.
"#,
        title = TITLE_PREFIX,
        card_title = req.card_title,
        card_content = req.card_content,
        grade = req.grade,
        topic = req.topic,
        location = req.location,
    )
}

pub fn deeper_dive_prompt(req: &CardRequest) -> String {
    format!(
        r#"{ASSISTANT_PERSONA} A teacher wants to go deeper on an asset they just generated.

**Asset to Expand:**
- Title: {card_title}
- Content: {card_content}

**Context:**
- Class/Grade: {grade}
- Topic: {topic}
- Location: {location}

**Your Task:**
Expand this asset into a richer version for the same class. Explain the underlying concept in more detail, add one worked example or extended activity rooted in the local context, and close with two follow-up questions that push students to think further. Keep everything appropriate for the grade level. Format the output with a "{title} {card_title}: Deeper Dive" heading. Return only this one asset with no separators.
"#,
        title = TITLE_PREFIX,
        card_title = req.card_title,
        card_content = req.card_content,
        grade = req.grade,
        topic = req.topic,
        location = req.location,
    )
}

pub fn student_reply_prompt(req: &StudentReplyRequest) -> String {
    format!(
        r#"{ASSISTANT_PERSONA} A teacher is rehearsing a classroom discussion and wants to see how to respond to a student.

**Question Posed to the Class:**
{card_content}

**Reply from a Student in Class/Grade {grade}:**
{student_reply}

**Your Task:**
Respond the way a thoughtful, encouraging teacher would. Acknowledge what the student got right, gently correct any misconception, and end with one follow-up question that moves their thinking forward. Keep the language suited to the grade level. Format the output with a "{title} Teacher Response" heading. Return only this one response with no separators.
"#,
        title = TITLE_PREFIX,
        card_content = req.card_content,
        grade = req.grade,
        student_reply = req.student_reply,
    )
}
