//! Bridge between the flex solver and the injected text shaping capability.
//!
//! The solver calls the measurer exactly once per text node per pass, at
//! the moment the node's width budget is final. The same measurer instance
//! serves both the intrinsic pass and the layout pass so that measured and
//! allocated heights agree for identical inputs.

use crate::{
  error::TextShapeError,
  geometry::Size,
  layout::{
    element::TextElement,
    style::{LengthUnit, LineHeight, TextAlign, TextOverflowMode},
  },
};

/// Ellipsis appended by the fallback measurer when truncating.
const ELLIPSIS: &str = "...";

/// A single shaped line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapedLine {
  /// The visible text of the line (after any truncation).
  pub content: String,
  /// Advance width of the line in pixels.
  pub width: f32,
}

/// The result of shaping one text element.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapedText {
  /// The visible lines, top to bottom.
  pub lines: Vec<ShapedLine>,
  /// Tight content size: widest line by lines times line height.
  pub size: Size,
  /// The line height metric used, in pixels.
  pub line_height: f32,
}

/// Everything a shaper needs to segment one text element.
#[derive(Debug, Clone, Copy)]
pub struct ShapeRequest<'a> {
  /// The content to shape.
  pub content: &'a str,
  /// Resolved font size in pixels.
  pub font_size: f32,
  /// Resolved line height in pixels.
  pub line_height: f32,
  /// Width budget; `None` means unbounded.
  pub max_width: Option<f32>,
  /// Whether breaking into multiple lines is allowed.
  pub wrap: bool,
  /// Upper bound on the number of lines.
  pub max_lines: Option<u32>,
  /// Handling of content that exceeds the budget.
  pub overflow: TextOverflowMode,
  /// Horizontal alignment, forwarded for shapers that position glyphs.
  pub align: TextAlign,
}

/// Capability that segments text into visible lines given a width budget.
///
/// Implementations must be deterministic: layout output is promised to be
/// bit-identical for identical inputs.
pub trait TextMeasurer: Send + Sync {
  /// Shapes the request into lines and a tight content size.
  fn shape(&self, request: &ShapeRequest<'_>) -> Result<ShapedText, TextShapeError>;
}

/// Font-relative attributes of a text element resolved to pixels.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedTextStyle {
  /// Font size in pixels.
  pub font_size: f32,
  /// Line height in pixels.
  pub line_height: f32,
}

impl ResolvedTextStyle {
  /// Resolves the element's `size` and `line_height` against the inherited
  /// base font size.
  ///
  /// A missing or `auto` size inherits the base; negative results clamp to
  /// zero.
  pub fn of(text: &TextElement, base_font_size: f32) -> Self {
    let font_size = text
      .size
      .and_then(|size| size.resolve(base_font_size, base_font_size))
      .unwrap_or(base_font_size)
      .max(0.0);

    let line_height = text
      .line_height
      .unwrap_or(LineHeight(LengthUnit::Auto))
      .resolve(font_size);

    Self {
      font_size,
      line_height,
    }
  }

  /// Builds the shaper request for this element at the given width budget.
  pub fn request<'a>(&self, text: &'a TextElement, max_width: Option<f32>) -> ShapeRequest<'a> {
    ShapeRequest {
      content: &text.content,
      font_size: self.font_size,
      line_height: self.line_height,
      max_width,
      wrap: text.wrap,
      max_lines: text.max_lines,
      overflow: text.overflow_mode,
      align: text.text_align,
    }
  }
}

/// Deterministic approximate shaper used when no measurer is injected.
///
/// Every character advances `font_size * char_width_ratio` pixels. Lines
/// break at spaces (and at hard `\n` breaks); words wider than the whole
/// budget break mid-word so a line never exceeds its budget.
#[derive(Debug, Clone)]
pub struct ApproximateTextMeasurer {
  /// Advance width of one character as a fraction of the font size.
  pub char_width_ratio: f32,
}

impl Default for ApproximateTextMeasurer {
  fn default() -> Self {
    Self {
      char_width_ratio: 0.6,
    }
  }
}

impl ApproximateTextMeasurer {
  fn char_width(&self, font_size: f32) -> f32 {
    (font_size * self.char_width_ratio).max(0.0)
  }

  fn measure(&self, text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * self.char_width(font_size)
  }

  fn break_segment(&self, segment: &str, budget: f32, font_size: f32, lines: &mut Vec<String>) {
    let char_w = self.char_width(font_size);
    let mut current = String::new();

    for word in segment.split_whitespace() {
      let word_width = self.measure(word, font_size);
      let current_width = self.measure(&current, font_size);

      if current.is_empty() {
        if word_width <= budget || char_w == 0.0 {
          current.push_str(word);
          continue;
        }

        // A single word wider than the whole budget breaks mid-word.
        self.break_word(word, budget, font_size, lines, &mut current);
        continue;
      }

      if current_width + char_w + word_width <= budget {
        current.push(' ');
        current.push_str(word);
      } else {
        lines.push(std::mem::take(&mut current));

        if word_width <= budget || char_w == 0.0 {
          current.push_str(word);
        } else {
          self.break_word(word, budget, font_size, lines, &mut current);
        }
      }
    }

    lines.push(current);
  }

  fn break_word(
    &self,
    word: &str,
    budget: f32,
    font_size: f32,
    lines: &mut Vec<String>,
    current: &mut String,
  ) {
    let char_w = self.char_width(font_size);
    let per_line = ((budget / char_w).floor() as usize).max(1);
    let chars: Vec<char> = word.chars().collect();

    for chunk in chars.chunks(per_line) {
      if !current.is_empty() {
        lines.push(std::mem::take(current));
      }
      current.extend(chunk.iter());
    }
  }

  fn ellipsize(&self, line: &str, budget: f32, font_size: f32) -> String {
    let char_w = self.char_width(font_size);
    if char_w == 0.0 {
      return format!("{line}{ELLIPSIS}");
    }

    let fit = (budget / char_w).floor() as usize;
    let keep = fit.saturating_sub(ELLIPSIS.chars().count());
    let truncated: String = line.chars().take(keep).collect();

    format!("{truncated}{ELLIPSIS}")
  }
}

impl TextMeasurer for ApproximateTextMeasurer {
  fn shape(&self, request: &ShapeRequest<'_>) -> Result<ShapedText, TextShapeError> {
    if request.content.is_empty() {
      return Ok(ShapedText {
        lines: Vec::new(),
        size: Size::ZERO,
        line_height: request.line_height,
      });
    }

    let mut lines: Vec<String> = Vec::new();

    for segment in request.content.split('\n') {
      match request.max_width {
        Some(budget) if request.wrap => {
          self.break_segment(segment, budget.max(0.0), request.font_size, &mut lines);
        }
        _ => lines.push(segment.split_whitespace().collect::<Vec<_>>().join(" ")),
      }
    }

    let mut truncated = false;

    if let Some(max_lines) = request.max_lines {
      let max_lines = max_lines.max(1) as usize;
      if lines.len() > max_lines {
        lines.truncate(max_lines);
        truncated = true;
      }
    }

    if request.overflow == TextOverflowMode::Ellipsis {
      if let (Some(budget), Some(last)) = (request.max_width, lines.last_mut()) {
        let overflows = self.measure(last, request.font_size) > budget;
        if truncated || overflows {
          *last = self.ellipsize(last, budget.max(0.0), request.font_size);
        }
      }
    }

    let shaped: Vec<ShapedLine> = lines
      .into_iter()
      .map(|content| {
        let width = self.measure(&content, request.font_size);
        ShapedLine { content, width }
      })
      .collect();

    let width = shaped.iter().fold(0.0_f32, |acc, line| acc.max(line.width));
    let height = shaped.len() as f32 * request.line_height;

    Ok(ShapedText {
      size: Size { width, height },
      line_height: request.line_height,
      lines: shaped,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn request(content: &str) -> ShapeRequest<'_> {
    ShapeRequest {
      content,
      font_size: 10.0,
      line_height: 12.0,
      max_width: None,
      wrap: true,
      max_lines: None,
      overflow: TextOverflowMode::Visible,
      align: TextAlign::Start,
    }
  }

  #[test]
  fn unbounded_text_stays_on_one_line() {
    let measurer = ApproximateTextMeasurer::default();
    let shaped = measurer.shape(&request("hello world")).unwrap();

    assert_eq!(shaped.lines.len(), 1);
    // 11 chars at 6px each.
    assert_eq!(shaped.size.width, 66.0);
    assert_eq!(shaped.size.height, 12.0);
  }

  #[test]
  fn wraps_at_spaces_within_budget() {
    let measurer = ApproximateTextMeasurer::default();
    let mut req = request("aaa bbb ccc");
    req.max_width = Some(40.0);

    let shaped = measurer.shape(&req).unwrap();
    // 6px per char: "aaa bbb" = 42px > 40, so one word per line.
    assert_eq!(shaped.lines.len(), 3);
    assert!(shaped.lines.iter().all(|line| line.width <= 40.0));
  }

  #[test]
  fn hard_breaks_always_apply() {
    let measurer = ApproximateTextMeasurer::default();
    let mut req = request("one\ntwo");
    req.wrap = false;

    let shaped = measurer.shape(&req).unwrap();
    assert_eq!(shaped.lines.len(), 2);
  }

  #[test]
  fn overlong_word_breaks_mid_word() {
    let measurer = ApproximateTextMeasurer::default();
    let mut req = request("abcdefghij");
    req.max_width = Some(30.0);

    let shaped = measurer.shape(&req).unwrap();
    // 5 chars fit per 30px line.
    assert_eq!(shaped.lines.len(), 2);
    assert_eq!(shaped.lines[0].content, "abcde");
  }

  #[test]
  fn max_lines_truncates_with_ellipsis() {
    let measurer = ApproximateTextMeasurer::default();
    let mut req = request("aaa bbb ccc ddd");
    req.max_width = Some(30.0);
    req.max_lines = Some(2);
    req.overflow = TextOverflowMode::Ellipsis;

    let shaped = measurer.shape(&req).unwrap();
    assert_eq!(shaped.lines.len(), 2);
    assert!(shaped.lines[1].content.ends_with("..."));
    assert!(shaped.lines[1].width <= 30.0);
  }

  #[test]
  fn empty_content_shapes_to_nothing() {
    let measurer = ApproximateTextMeasurer::default();
    let shaped = measurer.shape(&request("")).unwrap();
    assert!(shaped.lines.is_empty());
    assert_eq!(shaped.size, Size::ZERO);
  }
}
