//! HTML/XML tokenizer.
//!
//! A state machine over the input bytes in the spirit of htmlparser2. It
//! reports byte ranges through [`Callbacks`] and never allocates per token.
//! The body of a `<script>` element is read as raw text up to the matching
//! `</script`, so markup-looking characters inside script code are not
//! mistaken for tags.

use lucarne_relief::ErrorCode;

/// Character codes for fast comparison
pub mod char_codes {
    pub const TAB: u8 = 0x09;
    pub const NEWLINE: u8 = 0x0A;
    pub const FORM_FEED: u8 = 0x0C;
    pub const CARRIAGE_RETURN: u8 = 0x0D;
    pub const SPACE: u8 = 0x20;
    pub const EXCLAMATION_MARK: u8 = 0x21;
    pub const DOUBLE_QUOTE: u8 = 0x22;
    pub const SINGLE_QUOTE: u8 = 0x27;
    pub const DASH: u8 = 0x2D;
    pub const SLASH: u8 = 0x2F;
    pub const LT: u8 = 0x3C;
    pub const EQ: u8 = 0x3D;
    pub const GT: u8 = 0x3E;
    pub const QUESTION_MARK: u8 = 0x3F;
    pub const UPPER_A: u8 = 0x41;
    pub const UPPER_Z: u8 = 0x5A;
    pub const LEFT_SQUARE: u8 = 0x5B;
    pub const RIGHT_SQUARE: u8 = 0x5D;
    pub const LOWER_A: u8 = 0x61;
    pub const LOWER_Z: u8 = 0x7A;
}

use char_codes::*;

const SCRIPT: &[u8] = b"script";
const CDATA_START: &[u8] = b"CDATA[";

/// All the states the tokenizer can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum State {
    Text = 1,

    // Tags
    BeforeTagName,
    InTagName,
    InSelfClosingTag,
    BeforeClosingTagName,
    InClosingTagName,
    AfterClosingTagName,

    // Attributes
    BeforeAttrName,
    InAttrName,
    AfterAttrName,
    BeforeAttrValue,
    InAttrValueDq,
    InAttrValueSq,
    InAttrValueNq,

    // Declarations
    BeforeDeclaration,
    InDeclaration,

    // Processing instructions
    InProcessingInstruction,

    // Comments & CDATA
    BeforeComment,
    InComment,
    InCdata,

    // Raw body of a <script> element
    InScriptText,
}

/// Quote type for attribute values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum QuoteType {
    NoValue = 0,
    Unquoted = 1,
    Single = 2,
    Double = 3,
}

/// Tokenizer callbacks.
///
/// Every range is `[start, end)` in bytes. `end` arguments without a start
/// point at the delimiter that closed the construct (`>` or `/`).
pub trait Callbacks {
    #[allow(unused_variables)]
    fn on_text(&mut self, start: usize, end: usize) {}

    /// Raw body of a `<script>` element.
    #[allow(unused_variables)]
    fn on_script_text(&mut self, start: usize, end: usize) {}

    fn on_open_tag_name(&mut self, start: usize, end: usize);
    fn on_open_tag_end(&mut self, end: usize);
    fn on_self_closing_tag(&mut self, end: usize);

    /// `tag_start` is the offset of the `<` of the closing tag.
    fn on_close_tag(&mut self, tag_start: usize, start: usize, end: usize);
    fn on_close_tag_end(&mut self, end: usize);

    fn on_attrib_name(&mut self, start: usize, end: usize);
    /// Value range without quotes. For [`QuoteType::NoValue`] the range is
    /// empty and sits at the end of the attribute name.
    fn on_attrib_value(&mut self, quote: QuoteType, start: usize, end: usize);

    #[allow(unused_variables)]
    fn on_comment(&mut self, start: usize, end: usize) {}
    #[allow(unused_variables)]
    fn on_cdata(&mut self, start: usize, end: usize) {}
    #[allow(unused_variables)]
    fn on_processing_instruction(&mut self, start: usize, end: usize) {}

    fn on_end(&mut self) {}
    fn on_error(&mut self, code: ErrorCode, index: usize);
}

/// Check if character is a tag start character (a-z, A-Z)
#[inline]
pub fn is_tag_start_char(c: u8) -> bool {
    (LOWER_A..=LOWER_Z).contains(&c) || (UPPER_A..=UPPER_Z).contains(&c)
}

/// Check if character is whitespace
#[inline]
pub fn is_whitespace(c: u8) -> bool {
    c == SPACE || c == NEWLINE || c == TAB || c == FORM_FEED || c == CARRIAGE_RETURN
}

/// Check if character ends a tag section
#[inline]
pub fn is_end_of_tag_section(c: u8) -> bool {
    c == SLASH || c == GT || is_whitespace(c)
}

/// HTML/XML tokenizer
pub struct Tokenizer<'a, C: Callbacks> {
    /// Input source
    input: &'a [u8],
    /// Current state
    state: State,
    /// Buffer start position
    section_start: usize,
    /// Current index
    index: usize,
    /// Offset of the `<` opening the current tag
    tag_start: usize,
    /// Whether the open tag being read is `<script>`
    in_script_tag: bool,
    /// Callbacks
    callbacks: C,
}

impl<'a, C: Callbacks> Tokenizer<'a, C> {
    /// Create a new tokenizer
    pub fn new(input: &'a str, callbacks: C) -> Self {
        Self {
            input: input.as_bytes(),
            state: State::Text,
            section_start: 0,
            index: 0,
            tag_start: 0,
            in_script_tag: false,
            callbacks,
        }
    }

    /// Give the callbacks back once tokenizing is done
    pub fn into_callbacks(self) -> C {
        self.callbacks
    }

    /// Tokenize the input
    pub fn tokenize(&mut self) {
        while self.index < self.input.len() {
            let c = self.input[self.index];

            match self.state {
                State::Text => self.state_text(c),
                State::BeforeTagName => self.state_before_tag_name(c),
                State::InTagName => self.state_in_tag_name(c),
                State::InSelfClosingTag => self.state_in_self_closing_tag(c),
                State::BeforeClosingTagName => self.state_before_closing_tag_name(c),
                State::InClosingTagName => self.state_in_closing_tag_name(c),
                State::AfterClosingTagName => self.state_after_closing_tag_name(c),
                State::BeforeAttrName => self.state_before_attr_name(c),
                State::InAttrName => self.state_in_attr_name(c),
                State::AfterAttrName => self.state_after_attr_name(c),
                State::BeforeAttrValue => self.state_before_attr_value(c),
                State::InAttrValueDq => self.state_in_attr_value_quoted(c, DOUBLE_QUOTE),
                State::InAttrValueSq => self.state_in_attr_value_quoted(c, SINGLE_QUOTE),
                State::InAttrValueNq => self.state_in_attr_value_nq(c),
                State::BeforeDeclaration => self.state_before_declaration(c),
                State::InDeclaration => self.state_in_declaration(c),
                State::InProcessingInstruction => self.state_in_processing_instruction(c),
                State::BeforeComment => self.state_before_comment(c),
                State::InComment => self.state_in_comment(c),
                State::InCdata => self.state_in_cdata(c),
                State::InScriptText => self.state_in_script_text(c),
            }

            self.index += 1;
        }

        // Handle remaining content
        self.cleanup();
        self.callbacks.on_end();
    }

    fn cleanup(&mut self) {
        match self.state {
            State::Text => {
                if self.section_start < self.index {
                    self.callbacks.on_text(self.section_start, self.index);
                }
            }
            State::InScriptText => {
                if self.section_start < self.index {
                    self.callbacks
                        .on_script_text(self.section_start, self.index);
                }
                self.callbacks
                    .on_error(ErrorCode::EofInScriptText, self.index);
            }
            State::BeforeTagName
            | State::InTagName
            | State::InSelfClosingTag
            | State::BeforeClosingTagName
            | State::InClosingTagName
            | State::AfterClosingTagName
            | State::BeforeAttrName
            | State::InAttrName
            | State::AfterAttrName
            | State::BeforeAttrValue
            | State::InAttrValueDq
            | State::InAttrValueSq
            | State::InAttrValueNq => {
                self.callbacks.on_error(ErrorCode::EofInTag, self.index);
            }
            State::BeforeComment | State::InComment => {
                self.callbacks.on_error(ErrorCode::EofInComment, self.index);
                self.callbacks.on_comment(self.section_start, self.index);
            }
            State::InCdata => {
                self.callbacks.on_error(ErrorCode::EofInCdata, self.index);
            }
            State::BeforeDeclaration | State::InDeclaration | State::InProcessingInstruction => {}
        }
    }

    #[inline]
    fn lookahead_matches(&self, at: usize, sequence: &[u8]) -> bool {
        self.input
            .get(at..at + sequence.len())
            .is_some_and(|s| s.eq_ignore_ascii_case(sequence))
    }

    // ========== State handlers ==========

    fn state_text(&mut self, c: u8) {
        if c == LT {
            if self.index > self.section_start {
                self.callbacks.on_text(self.section_start, self.index);
            }
            self.state = State::BeforeTagName;
            self.section_start = self.index;
            self.tag_start = self.index;
        }
    }

    fn state_before_tag_name(&mut self, c: u8) {
        if c == EXCLAMATION_MARK {
            self.state = State::BeforeDeclaration;
            self.section_start = self.index + 1;
        } else if c == QUESTION_MARK {
            self.state = State::InProcessingInstruction;
            self.section_start = self.index + 1;
        } else if is_tag_start_char(c) {
            self.section_start = self.index;
            self.state = State::InTagName;
        } else if c == SLASH {
            self.state = State::BeforeClosingTagName;
        } else {
            // A lone `<` is text
            self.state = State::Text;
            self.state_text(c);
        }
    }

    fn state_in_tag_name(&mut self, c: u8) {
        if is_end_of_tag_section(c) {
            self.callbacks
                .on_open_tag_name(self.section_start, self.index);
            self.in_script_tag =
                self.input[self.section_start..self.index].eq_ignore_ascii_case(SCRIPT);
            self.section_start = self.index;
            self.state = State::BeforeAttrName;
            self.state_before_attr_name(c);
        }
    }

    fn state_in_self_closing_tag(&mut self, c: u8) {
        if c == GT {
            self.callbacks.on_self_closing_tag(self.index);
            self.in_script_tag = false;
            self.state = State::Text;
            self.section_start = self.index + 1;
        } else if !is_whitespace(c) {
            self.state = State::BeforeAttrName;
            self.state_before_attr_name(c);
        }
    }

    fn state_before_closing_tag_name(&mut self, c: u8) {
        if is_whitespace(c) {
            // Skip
        } else if c == GT {
            self.callbacks
                .on_error(ErrorCode::MissingEndTagName, self.index);
            self.state = State::Text;
            self.section_start = self.index + 1;
        } else {
            self.state = State::InClosingTagName;
            self.section_start = self.index;
        }
    }

    fn state_in_closing_tag_name(&mut self, c: u8) {
        if c == GT || is_whitespace(c) {
            self.callbacks
                .on_close_tag(self.tag_start, self.section_start, self.index);
            self.section_start = self.index + 1;
            if c == GT {
                self.callbacks.on_close_tag_end(self.index);
                self.state = State::Text;
            } else {
                self.state = State::AfterClosingTagName;
            }
        }
    }

    fn state_after_closing_tag_name(&mut self, c: u8) {
        if c == GT {
            self.callbacks.on_close_tag_end(self.index);
            self.state = State::Text;
            self.section_start = self.index + 1;
        }
    }

    fn state_before_attr_name(&mut self, c: u8) {
        if c == GT {
            self.callbacks.on_open_tag_end(self.index);
            self.state = if self.in_script_tag {
                State::InScriptText
            } else {
                State::Text
            };
            self.in_script_tag = false;
            self.section_start = self.index + 1;
        } else if c == SLASH {
            self.state = State::InSelfClosingTag;
        } else if !is_whitespace(c) {
            self.state = State::InAttrName;
            self.section_start = self.index;
        }
    }

    fn state_in_attr_name(&mut self, c: u8) {
        if c == EQ || is_end_of_tag_section(c) {
            self.callbacks
                .on_attrib_name(self.section_start, self.index);
            self.section_start = self.index;
            self.state = State::AfterAttrName;
            self.state_after_attr_name(c);
        }
    }

    fn state_after_attr_name(&mut self, c: u8) {
        if c == EQ {
            self.state = State::BeforeAttrValue;
        } else if c == SLASH || c == GT {
            self.callbacks
                .on_attrib_value(QuoteType::NoValue, self.section_start, self.section_start);
            self.state = State::BeforeAttrName;
            self.state_before_attr_name(c);
        } else if !is_whitespace(c) {
            self.callbacks
                .on_attrib_value(QuoteType::NoValue, self.section_start, self.section_start);
            self.state = State::InAttrName;
            self.section_start = self.index;
        }
    }

    fn state_before_attr_value(&mut self, c: u8) {
        if c == DOUBLE_QUOTE {
            self.state = State::InAttrValueDq;
            self.section_start = self.index + 1;
        } else if c == SINGLE_QUOTE {
            self.state = State::InAttrValueSq;
            self.section_start = self.index + 1;
        } else if !is_whitespace(c) {
            self.section_start = self.index;
            self.state = State::InAttrValueNq;
            self.state_in_attr_value_nq(c);
        }
    }

    fn state_in_attr_value_quoted(&mut self, c: u8, quote: u8) {
        if c == quote {
            let quote = if quote == DOUBLE_QUOTE {
                QuoteType::Double
            } else {
                QuoteType::Single
            };
            self.emit_attr_value(quote);
        }
    }

    fn state_in_attr_value_nq(&mut self, c: u8) {
        if is_whitespace(c) || c == GT {
            self.emit_attr_value(QuoteType::Unquoted);
            self.state_before_attr_name(c);
        }
    }

    fn emit_attr_value(&mut self, quote: QuoteType) {
        self.callbacks
            .on_attrib_value(quote, self.section_start, self.index);
        self.section_start = self.index + 1;
        self.state = State::BeforeAttrName;
    }

    fn state_before_declaration(&mut self, c: u8) {
        if c == DASH {
            self.state = State::BeforeComment;
            self.section_start = self.index + 1;
        } else if c == LEFT_SQUARE && self.lookahead_matches(self.index + 1, CDATA_START) {
            self.index += CDATA_START.len();
            self.state = State::InCdata;
            self.section_start = self.index + 1;
        } else {
            self.state = State::InDeclaration;
            self.state_in_declaration(c);
        }
    }

    fn state_in_declaration(&mut self, c: u8) {
        if c == GT {
            self.state = State::Text;
            self.section_start = self.index + 1;
        }
    }

    fn state_in_processing_instruction(&mut self, c: u8) {
        if c == GT {
            self.callbacks
                .on_processing_instruction(self.section_start, self.index);
            self.state = State::Text;
            self.section_start = self.index + 1;
        }
    }

    fn state_before_comment(&mut self, c: u8) {
        if c == DASH {
            self.state = State::InComment;
            self.section_start = self.index + 1;
        } else {
            self.state = State::InDeclaration;
            self.state_in_declaration(c);
        }
    }

    fn state_in_comment(&mut self, c: u8) {
        if c == DASH && self.lookahead_matches(self.index + 1, b"->") {
            self.callbacks.on_comment(self.section_start, self.index);
            self.index += 2;
            self.state = State::Text;
            self.section_start = self.index + 1;
        }
    }

    fn state_in_cdata(&mut self, c: u8) {
        if c == RIGHT_SQUARE && self.lookahead_matches(self.index + 1, b"]>") {
            self.callbacks.on_cdata(self.section_start, self.index);
            self.index += 2;
            self.state = State::Text;
            self.section_start = self.index + 1;
        }
    }

    fn state_in_script_text(&mut self, c: u8) {
        if c != LT
            || !self.lookahead_matches(self.index + 1, b"/")
            || !self.lookahead_matches(self.index + 2, SCRIPT)
        {
            return;
        }
        let after = self.index + 2 + SCRIPT.len();
        if after < self.input.len() && !is_end_of_tag_section(self.input[after]) {
            // `</scripts>` and friends stay script text
            return;
        }

        if self.section_start < self.index {
            self.callbacks
                .on_script_text(self.section_start, self.index);
        }
        self.tag_start = self.index;
        self.state = State::BeforeClosingTagName;
        // Skip the `/`; the closing tag name starts on the next byte
        self.index += 1;
    }
}
