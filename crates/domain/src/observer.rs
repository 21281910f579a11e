//! Intersection observer options and vertical intersection geometry.
//!
//! The browser computes intersections natively; [`intersection_ratio`] mirrors
//! that computation along the vertical axis so the same options can drive a
//! simulated page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseRootMarginError;

/// Margin grown (positive) or shrunk (negative) around the viewport before
/// intersections are computed. Values are CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl RootMargin {
    /// Margin that only moves the bottom edge of the viewport.
    #[must_use]
    pub fn bottom(bottom: f64) -> Self {
        Self {
            bottom,
            ..Self::default()
        }
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

impl FromStr for RootMargin {
    type Err = ParseRootMarginError;

    /// Parse the CSS margin shorthand (`"10px"`, `"0px 0px -50px 0px"`, …).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lengths = s
            .split_whitespace()
            .map(parse_px)
            .collect::<Result<Vec<_>, _>>()?;
        match lengths[..] {
            [all] => Ok(Self {
                top: all,
                right: all,
                bottom: all,
                left: all,
            }),
            [vertical, horizontal] => Ok(Self {
                top: vertical,
                right: horizontal,
                bottom: vertical,
                left: horizontal,
            }),
            [top, horizontal, bottom] => Ok(Self {
                top,
                right: horizontal,
                bottom,
                left: horizontal,
            }),
            [top, right, bottom, left] => Ok(Self {
                top,
                right,
                bottom,
                left,
            }),
            _ => Err(ParseRootMarginError::Arity(lengths.len())),
        }
    }
}

impl TryFrom<String> for RootMargin {
    type Error = ParseRootMarginError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RootMargin> for String {
    fn from(value: RootMargin) -> Self {
        value.to_string()
    }
}

fn parse_px(token: &str) -> Result<f64, ParseRootMarginError> {
    let number = match token.strip_suffix("px") {
        Some(number) => number,
        None if token == "0" => token,
        None => return Err(ParseRootMarginError::Length(token.to_string())),
    };
    number
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ParseRootMarginError::Length(token.to_string()))
}

/// Options passed to an intersection observer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverOptions {
    /// Fraction of the target that must be visible, in `[0, 1]`.
    pub threshold: f64,
    pub root_margin: RootMargin,
}

impl ObserverOptions {
    #[must_use]
    pub fn new(threshold: f64, root_margin: RootMargin) -> Self {
        Self {
            threshold,
            root_margin,
        }
    }

    /// Whether a target visible at `ratio` counts as intersecting.
    ///
    /// A zero threshold needs some overlap; any other threshold must be reached.
    #[must_use]
    pub fn qualifies(&self, ratio: f64) -> bool {
        if self.threshold <= 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.threshold
        }
    }
}

/// One observer notification for one target.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection<E> {
    pub target: E,
    pub is_intersecting: bool,
}

/// A vertical extent in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start: f64,
    pub length: f64,
}

impl Span {
    #[must_use]
    pub fn new(start: f64, length: f64) -> Self {
        Self { start, length }
    }

    #[must_use]
    pub fn end(self) -> f64 {
        self.start + self.length
    }
}

/// Fraction of `element` visible inside `viewport` once `margin` is applied.
///
/// Only the top and bottom margins matter along the vertical axis. A
/// zero-height element reports `1.0` when it sits inside the root and `0.0`
/// otherwise.
#[must_use]
pub fn intersection_ratio(element: Span, viewport: Span, margin: &RootMargin) -> f64 {
    let root_start = viewport.start - margin.top;
    let root_end = viewport.end() + margin.bottom;
    if element.length <= 0.0 {
        let inside = element.start >= root_start && element.start <= root_end;
        return if inside { 1.0 } else { 0.0 };
    }
    let overlap = element.end().min(root_end) - element.start.max(root_start);
    (overlap.max(0.0) / element.length).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_four_value_shorthand() {
        let margin: RootMargin = "0px 0px -50px 0px".parse().unwrap();
        assert_eq!(margin, RootMargin::bottom(-50.0));
    }

    #[test]
    fn should_expand_single_value_to_all_sides() {
        let margin: RootMargin = "10px".parse().unwrap();
        assert_eq!(margin.top, 10.0);
        assert_eq!(margin.left, 10.0);
    }

    #[test]
    fn should_expand_two_and_three_value_shorthands() {
        let two: RootMargin = "5px 8px".parse().unwrap();
        assert_eq!((two.top, two.right, two.bottom, two.left), (5.0, 8.0, 5.0, 8.0));

        let three: RootMargin = "1px 2px 3px".parse().unwrap();
        assert_eq!(
            (three.top, three.right, three.bottom, three.left),
            (1.0, 2.0, 3.0, 2.0)
        );
    }

    #[test]
    fn should_accept_unitless_zero() {
        let margin: RootMargin = "0 0 -50px 0".parse().unwrap();
        assert_eq!(margin.bottom, -50.0);
    }

    #[test]
    fn should_reject_non_pixel_lengths() {
        assert_eq!(
            "10%".parse::<RootMargin>(),
            Err(ParseRootMarginError::Length("10%".to_string()))
        );
    }

    #[test]
    fn should_reject_too_many_lengths() {
        assert_eq!(
            "1px 1px 1px 1px 1px".parse::<RootMargin>(),
            Err(ParseRootMarginError::Arity(5))
        );
        assert_eq!("".parse::<RootMargin>(), Err(ParseRootMarginError::Arity(0)));
    }

    #[test]
    fn should_display_css_shorthand() {
        assert_eq!(RootMargin::bottom(-50.0).to_string(), "0px 0px -50px 0px");
    }

    #[test]
    fn should_deserialize_options_from_json() {
        let options: ObserverOptions =
            serde_json::from_str(r#"{"threshold":0.1,"root_margin":"0px 0px -50px 0px"}"#)
                .unwrap();
        assert_eq!(options, ObserverOptions::new(0.1, RootMargin::bottom(-50.0)));
    }

    #[test]
    fn should_require_overlap_for_zero_threshold() {
        let options = ObserverOptions::default();
        assert!(!options.qualifies(0.0));
        assert!(options.qualifies(0.01));
    }

    #[test]
    fn should_require_threshold_to_be_reached() {
        let options = ObserverOptions::new(0.1, RootMargin::default());
        assert!(!options.qualifies(0.09));
        assert!(options.qualifies(0.1));
    }

    #[test]
    fn should_compute_partial_visibility() {
        let viewport = Span::new(0.0, 800.0);
        let element = Span::new(700.0, 200.0);
        let ratio = intersection_ratio(element, viewport, &RootMargin::default());
        assert!((ratio - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn should_shrink_viewport_bottom_with_negative_margin() {
        let viewport = Span::new(0.0, 800.0);
        let element = Span::new(760.0, 100.0);
        let plain = intersection_ratio(element, viewport, &RootMargin::default());
        let shrunk = intersection_ratio(element, viewport, &RootMargin::bottom(-50.0));
        assert!((plain - 0.4).abs() < 1e-9);
        assert!(shrunk.abs() < f64::EPSILON);
    }

    #[test]
    fn should_report_zero_when_element_is_below_viewport() {
        let ratio = intersection_ratio(
            Span::new(2_000.0, 100.0),
            Span::new(0.0, 800.0),
            &RootMargin::default(),
        );
        assert!(ratio.abs() < f64::EPSILON);
    }

    #[test]
    fn should_treat_zero_height_element_as_point() {
        let viewport = Span::new(0.0, 800.0);
        let margin = RootMargin::default();
        let ratio = intersection_ratio(Span::new(10.0, 0.0), viewport, &margin);
        assert!((ratio - 1.0).abs() < f64::EPSILON);
        assert!(intersection_ratio(Span::new(900.0, 0.0), viewport, &margin).abs() < f64::EPSILON);
    }
}
