//! Markdown body to HTML, with heading anchors and highlighted code.

use std::{collections::HashMap, sync::LazyLock};

use pulldown_cmark::{
    CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html,
};
use syntect::{
    html::{ClassStyle, ClassedHTMLGenerator},
    parsing::{SyntaxReference, SyntaxSet},
    util::LinesWithEndings,
};

/// Words per minute used for reading time estimates.
pub const READING_WPM: usize = 200;

/// Prefix of the scope classes on highlighted code spans (`hl-keyword`).
pub const HIGHLIGHT_CLASS_PREFIX: &str = "hl-";

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Heading {
    pub level: u8,
    pub id: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct RenderedMarkdown {
    pub html: String,
    pub headings: Vec<Heading>,
}

fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_HEADING_ATTRIBUTES
}

/// Render GitHub-flavoured Markdown. Every heading gets an `id`; fenced code
/// blocks carry a `language-*` class and, for known languages, scope
/// classed spans prefixed with [`HIGHLIGHT_CLASS_PREFIX`].
pub fn render_markdown(source: &str) -> RenderedMarkdown {
    let mut events: Vec<Event<'_>> = Parser::new_ext(source, options()).collect();
    let mut slugger = Slugger::default();
    let mut headings = Vec::new();

    for i in 0..events.len() {
        let Event::Start(Tag::Heading { level, id, .. }) = &events[i] else {
            continue;
        };
        let level = heading_level(*level);
        let explicit = id.as_ref().map(|s| s.to_string());
        let text = heading_text(&events[i + 1..]);
        let id = match explicit {
            Some(id) => {
                slugger.reserve(&id);
                id
            }
            None => slugger.slug(&text),
        };
        if let Event::Start(Tag::Heading { id: slot, .. }) = &mut events[i] {
            *slot = Some(CowStr::from(id.clone()));
        }
        headings.push(Heading { level, id, text });
    }

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, highlight_code_blocks(events).into_iter());
    RenderedMarkdown {
        html: out,
        headings,
    }
}

/// Fenced block waiting for its closing event.
struct OpenBlock {
    syntax: &'static SyntaxReference,
    info: String,
    lang: String,
    code: String,
}

fn highlight_code_blocks(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut out = Vec::with_capacity(events.len());
    let mut open: Option<OpenBlock> = None;
    for ev in events {
        if let Some(block) = open.as_mut() {
            match ev {
                Event::Text(t) => block.code.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    if let Some(block) = open.take() {
                        push_block(&mut out, block);
                    }
                }
                _ => {}
            }
            continue;
        }
        if let Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) = &ev
            && let Some((lang, syntax)) = syntax_for(info)
        {
            open = Some(OpenBlock {
                syntax,
                info: info.to_string(),
                lang: lang.to_owned(),
                code: String::new(),
            });
            continue;
        }
        out.push(ev);
    }
    out
}

/// Language token of a fence info string (`rust,ignore` is `rust`) and its syntax.
fn syntax_for(info: &str) -> Option<(&str, &'static SyntaxReference)> {
    let lang = info.split([' ', ',', '{']).next()?.trim();
    if lang.is_empty() {
        return None;
    }
    SYNTAXES.find_syntax_by_token(lang).map(|s| (lang, s))
}

fn push_block<'a>(out: &mut Vec<Event<'a>>, block: OpenBlock) {
    match highlight(&block) {
        Ok(html) => out.push(Event::Html(CowStr::from(html))),
        Err(e) => {
            tracing::warn!(lang = %block.lang, error = %e, "code highlighting failed");
            out.push(Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(
                CowStr::from(block.info),
            ))));
            out.push(Event::Text(CowStr::from(block.code)));
            out.push(Event::End(TagEnd::CodeBlock));
        }
    }
}

fn highlight(block: &OpenBlock) -> Result<String, syntect::Error> {
    let mut generator = ClassedHTMLGenerator::new_with_class_style(
        block.syntax,
        &SYNTAXES,
        ClassStyle::SpacedPrefixed {
            prefix: HIGHLIGHT_CLASS_PREFIX,
        },
    );
    for line in LinesWithEndings::from(&block.code) {
        generator.parse_html_for_line_which_includes_newline(line)?;
    }
    Ok(format!(
        "<pre><code class=\"language-{}\">{}</code></pre>\n",
        block.lang,
        generator.finalize()
    ))
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn heading_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for ev in events {
        match ev {
            Event::End(TagEnd::Heading(_)) => break,
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            _ => {}
        }
    }
    text
}

/// GitHub-style anchor: lowercase, punctuation dropped, spaces to `-`.
pub fn slugify(text: &str) -> String {
    text.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .filter_map(|c| match c {
            ' ' => Some('-'),
            '-' | '_' => Some(c),
            c if c.is_alphanumeric() => Some(c),
            _ => None,
        })
        .collect()
}

/// Hands out unique anchors within one document (`intro`, `intro-1`, ...).
#[derive(Debug, Default)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut candidate = base.clone();
        while self.seen.contains_key(&candidate) {
            let n = self.seen.entry(base.clone()).or_insert(0);
            *n += 1;
            candidate = format!("{base}-{n}");
        }
        self.seen.insert(candidate.clone(), 0);
        candidate
    }

    fn reserve(&mut self, id: &str) {
        self.seen.entry(id.to_owned()).or_insert(0);
    }
}

/// Whole minutes at [`READING_WPM`], at least one for non-empty text.
pub fn reading_minutes(text: &str) -> u32 {
    let words = text.split_whitespace().count();
    if words == 0 {
        return 0;
    }
    u32::try_from(words.div_ceil(READING_WPM)).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/content/markdown.rs"]
mod tests;
