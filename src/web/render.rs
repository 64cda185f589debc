//! Server-rendered notes page. The view is assembled as a plain string with
//! all user text escaped; no template engine.

use crate::Note;

const PAGE_HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Notes</title>
</head>
<body>
  <h1>Notes</h1>
  <form action="/notes/add" method="post">
    <input name="title" placeholder="Title">
    <textarea name="content" placeholder="Content"></textarea>
    <button type="submit">Add</button>
  </form>
"#;

const PAGE_FOOTER: &str = "</body>\n</html>\n";

/// Renders the full list page for the given notes, sorted by ID so the page
/// is deterministic even though the store hands them out unordered.
#[must_use]
pub fn notes_page(notes: &[Note]) -> String {
    let mut sorted: Vec<&Note> = notes.iter().collect();
    sorted.sort_by_key(|note| note.id);

    let mut page = String::from(PAGE_HEADER);
    if sorted.is_empty() {
        page.push_str("  <p>No notes yet.</p>\n");
    }
    for note in sorted {
        page.push_str(&note_section(note));
    }
    page.push_str(PAGE_FOOTER);
    page
}

// One <section> per note: heading, update form, delete form
fn note_section(note: &Note) -> String {
    format!(
        r#"  <section>
    <h2>#{id} {title}</h2>
    <form action="/notes/update" method="post">
      <input type="hidden" name="id" value="{id}">
      <input name="title" value="{title}">
      <textarea name="content">{content}</textarea>
      <button type="submit">Update</button>
    </form>
    <form action="/notes/delete" method="post">
      <input type="hidden" name="id" value="{id}">
      <button type="submit">Delete</button>
    </form>
  </section>
"#,
        id = note.id,
        title = escape(&note.title),
        content = escape(&note.content),
    )
}

/// Escapes text for embedding in HTML element or attribute content.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
