//! Body structure extraction via pulldown-cmark

use pulldown_cmark::{Event, HeadingLevel, Parser as CmarkParser, Tag, TagEnd};
use trellis_core::{Heading, NoteStructure};

/// Extract the structural facts of a body: heading outline, paragraph
/// count, and a plain-text rendering for word/char counts.
///
/// Code-block content is excluded from the plain text; it is code, not
/// prose.
pub fn parse_structure(body: &str) -> NoteStructure {
    let parser = CmarkParser::new(body);

    let mut headings = Vec::new();
    let mut plain_text = String::new();
    let mut paragraph_count = 0;

    let mut in_heading = false;
    let mut in_code_block = false;
    let mut current_level: u8 = 0;
    let mut current_text = String::new();
    let mut current_offset = 0;

    for (event, range) in parser.into_offset_iter() {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                in_heading = true;
                current_level = heading_level_to_u8(level);
                current_text.clear();
                current_offset = range.start;
            }
            Event::End(TagEnd::Heading(_)) => {
                if in_heading {
                    headings.push(Heading::new(
                        current_level,
                        current_text.trim(),
                        current_offset,
                    ));
                    in_heading = false;
                }
            }
            Event::Start(Tag::Paragraph) => {
                paragraph_count += 1;
            }
            Event::End(TagEnd::Paragraph) => {
                plain_text.push('\n');
            }
            Event::Start(Tag::CodeBlock(_)) => {
                in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
            }
            Event::Text(text) => {
                if in_heading {
                    current_text.push_str(&text);
                } else if !in_code_block {
                    plain_text.push_str(&text);
                }
            }
            Event::Code(code) => {
                if in_heading {
                    current_text.push_str(&code);
                } else {
                    plain_text.push_str(&code);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if in_heading {
                    current_text.push(' ');
                } else if !in_code_block {
                    plain_text.push(' ');
                }
            }
            _ => {}
        }
    }

    let mut structure = NoteStructure::new().with_plain_text(plain_text.trim().to_string());
    structure.headings = headings;
    structure.paragraph_count = paragraph_count;
    structure
}

fn heading_level_to_u8(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
