use std::fmt;
use std::str::FromStr;

/// A position along an element or along the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    Top,
    Center,
    Bottom,
    /// Fraction of the length, parsed from `"85%"`
    Fraction(f64),
    /// Pixel offset from the top, parsed from `"-80"` or `"120px"`
    Px(f64),
}

impl Anchor {
    #[inline]
    pub fn offset(self, length: f64) -> f64 {
        match self {
            Anchor::Top => 0.0,
            Anchor::Center => length * 0.5,
            Anchor::Bottom => length,
            Anchor::Fraction(f) => length * f,
            Anchor::Px(px) => px,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParseTriggerError {
    Empty,
    MissingViewportAnchor(String),
    BadAnchor(String),
}

impl fmt::Display for ParseTriggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseTriggerError::Empty => write!(f, "empty trigger point"),
            ParseTriggerError::MissingViewportAnchor(s) => {
                write!(f, "trigger point {s:?} needs an element edge and a viewport anchor")
            }
            ParseTriggerError::BadAnchor(s) => write!(f, "unrecognized anchor {s:?}"),
        }
    }
}

impl std::error::Error for ParseTriggerError {}

impl FromStr for Anchor {
    type Err = ParseTriggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => return Ok(Anchor::Top),
            "center" => return Ok(Anchor::Center),
            "bottom" => return Ok(Anchor::Bottom),
            _ => {}
        }
        let bad = || ParseTriggerError::BadAnchor(s.to_string());
        if let Some(pct) = s.strip_suffix('%') {
            let v: f64 = pct.parse().map_err(|_| bad())?;
            return Ok(Anchor::Fraction(v / 100.0));
        }
        let px = s.strip_suffix("px").unwrap_or(s);
        let v: f64 = px.parse().map_err(|_| bad())?;
        if v.is_finite() {
            Ok(Anchor::Px(v))
        } else {
            Err(bad())
        }
    }
}

/// The scroll position where `element` anchor meets `viewport` anchor.
///
/// `"top 85%"` reads as: the element's top reaches 85% down the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerPoint {
    pub element: Anchor,
    pub viewport: Anchor,
}

impl TriggerPoint {
    pub const fn new(element: Anchor, viewport: Anchor) -> Self {
        Self { element, viewport }
    }

    #[inline]
    pub fn resolve(&self, layout: ElementLayout, viewport_height: f64) -> f64 {
        layout.top + self.element.offset(layout.height) - self.viewport.offset(viewport_height)
    }
}

impl FromStr for TriggerPoint {
    type Err = ParseTriggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let element = parts.next().ok_or(ParseTriggerError::Empty)?;
        let viewport = parts
            .next()
            .ok_or_else(|| ParseTriggerError::MissingViewportAnchor(s.to_string()))?;
        if parts.next().is_some() {
            return Err(ParseTriggerError::BadAnchor(s.to_string()));
        }
        Ok(Self {
            element: element.parse()?,
            viewport: viewport.parse()?,
        })
    }
}

/// End of a region: either another trigger point or a distance past the start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RegionEnd {
    Point(TriggerPoint),
    /// `"+=<px>"`
    After(f64),
}

impl FromStr for RegionEnd {
    type Err = ParseTriggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().strip_prefix("+=") {
            Some(px) => {
                let v: f64 = px
                    .trim()
                    .parse()
                    .map_err(|_| ParseTriggerError::BadAnchor(s.to_string()))?;
                Ok(RegionEnd::After(v))
            }
            None => Ok(RegionEnd::Point(s.parse()?)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionSpec {
    pub start: TriggerPoint,
    pub end: RegionEnd,
}

impl RegionSpec {
    pub fn parse(start: &str, end: &str) -> Result<Self, ParseTriggerError> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }
}

/// Element box in document coordinates (already offset by the scroll position).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementLayout {
    pub top: f64,
    pub height: f64,
}

/// Scroll interval in document pixels mapped to progress 0..1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub start: f64,
    pub end: f64,
}

impl Region {
    pub fn measure(spec: &RegionSpec, layout: ElementLayout, viewport_height: f64) -> Self {
        let start = spec.start.resolve(layout, viewport_height);
        let end = match spec.end {
            RegionEnd::Point(p) => p.resolve(layout, viewport_height),
            RegionEnd::After(px) => start + px,
        };
        Self { start, end }
    }

    /// Clamped progress. A zero-length region behaves as a step at `start`.
    pub fn progress(&self, scroll_y: f64) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return if scroll_y >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll_y - self.start) / span).clamp(0.0, 1.0)
    }
}

/// Normalized progress for one tracked region, recomputed on layout changes.
#[derive(Clone, Debug)]
pub struct ProgressSource {
    spec: RegionSpec,
    region: Region,
    progress: Option<f64>,
}

impl ProgressSource {
    pub fn new(spec: RegionSpec, layout: ElementLayout, viewport_height: f64) -> Self {
        Self {
            spec,
            region: Region::measure(&spec, layout, viewport_height),
            progress: None,
        }
    }

    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress.unwrap_or(0.0)
    }

    pub fn set_spec(&mut self, spec: RegionSpec) {
        self.spec = spec;
    }

    /// Re-measure boundaries after a resize; the next `update` always reports.
    pub fn refresh(&mut self, layout: ElementLayout, viewport_height: f64) {
        self.region = Region::measure(&self.spec, layout, viewport_height);
        self.progress = None;
    }

    /// Returns the new progress when it differs from the last reported value.
    pub fn update(&mut self, scroll_y: f64) -> Option<f64> {
        let p = self.region.progress(scroll_y);
        if self.progress == Some(p) {
            return None;
        }
        self.progress = Some(p);
        Some(p)
    }
}
