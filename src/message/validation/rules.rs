//! Field rule tables for every canonical content variant.
//!
//! Each variant's contract is a static slice of [`FieldRule`]s. The same
//! tables drive validation (here) and schema derivation (in
//! [`super::schema`]), so the two cannot drift apart.

use serde_json::{Map, Value};
use url::Url;

use crate::message::{domain::MessageType, error::ValidationError};

/// Maximum length of a text message body, in characters.
pub const MAX_TEXT_LENGTH: usize = 5000;

/// Maximum length of a card title, in characters.
pub const MAX_TITLE_LENGTH: usize = 160;

/// Maximum length of a card description, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// Field names reserved for the channel and variant tags.
pub const TAG_FIELDS: [&str; 2] = ["type", "messageType"];

const URL_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

const MIME_TOP_LEVEL_TYPES: [&str; 9] = [
    "application",
    "audio",
    "font",
    "image",
    "message",
    "model",
    "multipart",
    "text",
    "video",
];

const MAX_MIME_SUBTYPE_LENGTH: usize = 100;

/// Syntax a field value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    /// Any string.
    Text,
    /// A well-formed absolute `http`, `https`, or `ftp` URL.
    Url,
    /// A syntactically valid MIME type.
    MimeType,
    /// An ordered array of objects, each checked against the nested rules.
    List(&'static [FieldRule]),
}

/// Constraint on a single content field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Wire name of the field.
    pub name: &'static str,
    /// Required syntax.
    pub format: FieldFormat,
    /// Whether the field must be present and non-null.
    pub required: bool,
    /// Whether a present string must contain non-whitespace characters.
    pub non_empty: bool,
    /// Maximum length in characters, if bounded.
    pub max_length: Option<usize>,
    /// Human-readable description used in generated schemas.
    pub description: &'static str,
}

impl FieldRule {
    const fn optional(name: &'static str, format: FieldFormat, description: &'static str) -> Self {
        Self {
            name,
            format,
            required: false,
            non_empty: false,
            max_length: None,
            description,
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn non_empty(mut self) -> Self {
        self.non_empty = true;
        self
    }

    const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }
}

const TEXT_RULES: &[FieldRule] = &[FieldRule::optional(
    "text",
    FieldFormat::Text,
    "Message body.",
)
.required()
.max_length(MAX_TEXT_LENGTH)];

const FILE_RULES: &[FieldRule] = &[
    FieldRule::optional("url", FieldFormat::Url, "Where the file can be fetched.").required(),
    FieldRule::optional("mimeType", FieldFormat::MimeType, "MIME type of the file.").required(),
    FieldRule::optional("fileName", FieldFormat::Text, "Display name of the file.")
        .required()
        .non_empty(),
];

const RICH_CARD_RULES: &[FieldRule] = &[
    FieldRule::optional("title", FieldFormat::Text, "Card title.")
        .required()
        .non_empty()
        .max_length(MAX_TITLE_LENGTH),
    FieldRule::optional("description", FieldFormat::Text, "Optional card body.")
        .max_length(MAX_DESCRIPTION_LENGTH),
    FieldRule::optional("fileUrl", FieldFormat::Url, "Media shown on the card.")
        .required()
        .non_empty(),
];

/// Rules applied to each element of a carousel's `items`.
pub const CAROUSEL_ITEM_RULES: &[FieldRule] = &[
    FieldRule::optional("title", FieldFormat::Text, "Card title.")
        .required()
        .max_length(MAX_TITLE_LENGTH),
    FieldRule::optional("description", FieldFormat::Text, "Optional card body.")
        .max_length(MAX_DESCRIPTION_LENGTH),
    FieldRule::optional("fileUrl", FieldFormat::Url, "Media shown on the card.").required(),
];

const CAROUSEL_RULES: &[FieldRule] = &[FieldRule::optional(
    "items",
    FieldFormat::List(CAROUSEL_ITEM_RULES),
    "Cards in presentation order.",
)
.required()];

/// Returns the field rules for a message type.
///
/// # Examples
///
/// ```
/// use channels_gateway::message::domain::MessageType;
/// use channels_gateway::message::validation::rules::rules_for;
///
/// let names: Vec<_> = rules_for(MessageType::Document).iter().map(|r| r.name).collect();
/// assert_eq!(names, ["url", "mimeType", "fileName"]);
/// ```
#[must_use]
pub const fn rules_for(message_type: MessageType) -> &'static [FieldRule] {
    match message_type {
        MessageType::Text => TEXT_RULES,
        MessageType::Image | MessageType::Video | MessageType::Document => FILE_RULES,
        MessageType::RichCard => RICH_CARD_RULES,
        MessageType::Carousel => CAROUSEL_RULES,
    }
}

/// Checks a field map against a rule table.
///
/// Fields not named by any rule are reported as unexpected, except the
/// top-level tag fields when `allow_tags` is set. Every violation is
/// appended to `errors`; field paths are prefixed with `prefix`.
pub fn check_fields(
    fields: &Map<String, Value>,
    rules: &[FieldRule],
    prefix: &str,
    allow_tags: bool,
    errors: &mut Vec<ValidationError>,
) {
    for rule in rules {
        let path = join_path(prefix, rule.name);
        check_field(fields.get(rule.name), rule, &path, errors);
    }

    for key in fields.keys() {
        let known = rules.iter().any(|rule| rule.name == key);
        let is_tag = allow_tags && TAG_FIELDS.contains(&key.as_str());
        if !known && !is_tag {
            errors.push(ValidationError::UnexpectedField(join_path(prefix, key)));
        }
    }
}

fn check_field(
    value: Option<&Value>,
    rule: &FieldRule,
    path: &str,
    errors: &mut Vec<ValidationError>,
) {
    let Some(present) = value.filter(|v| !v.is_null()) else {
        if rule.required {
            errors.push(ValidationError::MissingField(path.to_owned()));
        }
        return;
    };

    match rule.format {
        FieldFormat::List(item_rules) => check_list(present, item_rules, path, errors),
        FieldFormat::Text | FieldFormat::Url | FieldFormat::MimeType => {
            let Some(text) = present.as_str() else {
                errors.push(ValidationError::WrongType {
                    field: path.to_owned(),
                    expected: "a string",
                });
                return;
            };
            check_string(text, rule, path, errors);
        }
    }
}

fn check_string(text: &str, rule: &FieldRule, path: &str, errors: &mut Vec<ValidationError>) {
    if rule.non_empty && text.trim().is_empty() {
        errors.push(ValidationError::EmptyField(path.to_owned()));
    }

    if let Some(max) = rule.max_length {
        let actual = text.chars().count();
        if actual > max {
            errors.push(ValidationError::TooLong {
                field: path.to_owned(),
                max,
                actual,
            });
        }
    }

    match rule.format {
        FieldFormat::Url if !is_well_formed_url(text) => {
            errors.push(ValidationError::InvalidUrl(path.to_owned()));
        }
        FieldFormat::MimeType if !is_valid_mime_type(text) => {
            errors.push(ValidationError::InvalidMimeType(path.to_owned()));
        }
        _ => {}
    }
}

fn check_list(
    value: &Value,
    item_rules: &[FieldRule],
    path: &str,
    errors: &mut Vec<ValidationError>,
) {
    let Some(items) = value.as_array() else {
        errors.push(ValidationError::WrongType {
            field: path.to_owned(),
            expected: "an array",
        });
        return;
    };

    for (index, item) in items.iter().enumerate() {
        let item_path = format!("{path}[{index}]");
        match item.as_object() {
            Some(fields) => check_fields(fields, item_rules, &item_path, false, errors),
            None => errors.push(ValidationError::WrongType {
                field: item_path,
                expected: "an object",
            }),
        }
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}.{name}")
    }
}

/// Returns `true` if `value` is an absolute `http`, `https`, or `ftp` URL
/// with a host and no surrounding whitespace.
///
/// # Examples
///
/// ```
/// use channels_gateway::message::validation::rules::is_well_formed_url;
///
/// assert!(is_well_formed_url("https://x/a.png"));
/// assert!(!is_well_formed_url("not a url"));
/// assert!(!is_well_formed_url("mailto:someone@example.com"));
/// ```
#[must_use]
pub fn is_well_formed_url(value: &str) -> bool {
    if value.trim() != value {
        return false;
    }
    Url::parse(value).is_ok_and(|url| {
        URL_SCHEMES.contains(&url.scheme()) && url.host_str().is_some_and(|host| !host.is_empty())
    })
}

/// Returns `true` if `value` is a syntactically valid MIME type.
///
/// Accepts a registered top-level type, a subtype of letters, digits, and
/// `.+-_`, and optional `; key=value` parameters.
///
/// # Examples
///
/// ```
/// use channels_gateway::message::validation::rules::is_valid_mime_type;
///
/// assert!(is_valid_mime_type("application/pdf"));
/// assert!(is_valid_mime_type("text/plain; charset=utf-8"));
/// assert!(!is_valid_mime_type("pdf"));
/// assert!(!is_valid_mime_type("foo/bar"));
/// ```
#[must_use]
pub fn is_valid_mime_type(value: &str) -> bool {
    let mut segments = value.split(';');
    let essence = segments.next().unwrap_or_default();

    let Some((top_level, subtype)) = essence.split_once('/') else {
        return false;
    };

    let top_level_ok = MIME_TOP_LEVEL_TYPES.contains(&top_level.to_ascii_lowercase().as_str());
    let subtype_ok = !subtype.is_empty()
        && subtype.len() <= MAX_MIME_SUBTYPE_LENGTH
        && subtype
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '+' | '_'));

    top_level_ok && subtype_ok && segments.all(is_valid_mime_parameter)
}

fn is_valid_mime_parameter(parameter: &str) -> bool {
    let Some((key, value)) = parameter.trim().split_once('=') else {
        return false;
    };
    let quoted = value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .is_some_and(|inner| !inner.contains('"'));
    is_mime_token(key) && (is_mime_token(value) || quoted)
}

fn is_mime_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_graphic() && !"()<>@,;:\\\"/[]?=".contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("https://x/a.png", true)]
    #[case("http://cdn.example.com/path?q=1", true)]
    #[case("ftp://files.example.com/a.pdf", true)]
    #[case("", false)]
    #[case("a.png", false)]
    #[case("file:///tmp/a.png", false)]
    #[case(" https://x/a.png", false)]
    #[case("https://", false)]
    fn url_well_formedness(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_well_formed_url(value), expected);
    }

    #[rstest]
    #[case("image/png", true)]
    #[case("application/vnd.openxmlformats-officedocument.wordprocessingml.document", true)]
    #[case("image/svg+xml", true)]
    #[case("text/plain; charset=utf-8", true)]
    #[case("text/plain; charset=\"utf-8\"", true)]
    #[case("IMAGE/PNG", true)]
    #[case("", false)]
    #[case("image", false)]
    #[case("image/", false)]
    #[case("/png", false)]
    #[case("unknown/png", false)]
    #[case("image/p ng", false)]
    #[case("text/plain; charset", false)]
    fn mime_type_syntax(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_mime_type(value), expected);
    }

    #[rstest]
    fn file_types_share_one_rule_table() {
        assert_eq!(rules_for(MessageType::Image), rules_for(MessageType::Video));
        assert_eq!(rules_for(MessageType::Image), rules_for(MessageType::Document));
    }

    #[rstest]
    fn null_optional_field_is_treated_as_absent() {
        let fields = json!({ "title": "t", "description": null, "fileUrl": "https://x/a.png" });
        let mut errors = Vec::new();
        check_fields(
            fields.as_object().expect("object"),
            rules_for(MessageType::RichCard),
            "",
            true,
            &mut errors,
        );
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[rstest]
    fn nested_item_paths_are_indexed() {
        let fields = json!({ "items": [
            { "title": "ok", "fileUrl": "https://x/1.png" },
            { "title": "bad", "fileUrl": "nope" }
        ]});
        let mut errors = Vec::new();
        check_fields(
            fields.as_object().expect("object"),
            rules_for(MessageType::Carousel),
            "",
            true,
            &mut errors,
        );
        assert_eq!(
            errors,
            vec![ValidationError::InvalidUrl("items[1].fileUrl".to_owned())]
        );
    }

    #[rstest]
    fn tags_are_unexpected_inside_items() {
        let fields = json!({ "items": [
            { "title": "t", "fileUrl": "https://x/1.png", "messageType": "image" }
        ]});
        let mut errors = Vec::new();
        check_fields(
            fields.as_object().expect("object"),
            rules_for(MessageType::Carousel),
            "",
            true,
            &mut errors,
        );
        assert_eq!(
            errors,
            vec![ValidationError::UnexpectedField(
                "items[0].messageType".to_owned()
            )]
        );
    }
}
