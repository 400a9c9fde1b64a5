use super::constants::SEEK_HYSTERESIS_SEC;
use super::viewport::ViewportClass;
use smallvec::SmallVec;

/// Readiness of the media duration. Resolves at most once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DurationState {
    Pending,
    Ready(f64),
    /// Metadata never arrived; text sequencing runs without seeking.
    Unavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingMode {
    Unbound,
    /// Desktop binding requested while the duration is still pending
    Deferred,
    /// Scroll-coupled: progress drives playback position and active text
    Scroll,
    /// Mobile fallback: everything visible, media looping, no scroll coupling
    Static,
}

/// What a bind request did. The browser layer applies the media side
/// effects (pause for `Scroll`, play for `Static`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindOutcome {
    Scroll,
    Static,
    Deferred,
    AlreadyBound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextTransition {
    pub index: usize,
    pub to: Visibility,
}

/// Effects of one progress update.
///
/// Fields:
/// - `seek_to`: new playback position in seconds, if it moved past the hysteresis
/// - `active`: active text index after the update
/// - `transitions`: independent per-block visibility changes to start
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionUpdate {
    pub seek_to: Option<f64>,
    pub active: Option<usize>,
    pub transitions: SmallVec<[TextTransition; 4]>,
}

impl SectionUpdate {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seek_to.is_none() && self.transitions.is_empty()
    }
}

/// `clamp(floor(progress * count), 0, count - 1)`; `None` without blocks.
#[inline]
pub fn active_index(progress: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let p = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    Some(((p * count as f64).floor() as usize).min(count - 1))
}

/// Maps a region's progress onto media playback and an ordered list of text
/// blocks for one scroll-bound section.
///
/// Binding is idempotent per viewport class. On desktop the section is
/// scroll-coupled once the media duration is known (or declared unavailable);
/// on mobile it falls back to a static, always-visible state.
#[derive(Clone, Debug)]
pub struct SectionSequencer {
    text_count: usize,
    duration: DurationState,
    mode: BindingMode,
    bound_class: Option<ViewportClass>,
    active: Option<usize>,
    generation: u32,
}

impl SectionSequencer {
    pub fn new(text_count: usize) -> Self {
        Self {
            text_count,
            duration: DurationState::Pending,
            mode: BindingMode::Unbound,
            bound_class: None,
            active: None,
            generation: 0,
        }
    }

    #[inline]
    pub fn text_count(&self) -> usize {
        self.text_count
    }

    #[inline]
    pub fn mode(&self) -> BindingMode {
        self.mode
    }

    #[inline]
    pub fn duration(&self) -> DurationState {
        self.duration
    }

    #[inline]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Number of activations so far (scroll or static).
    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn bind(&mut self, class: ViewportClass) -> BindOutcome {
        if self.bound_class == Some(class) {
            return BindOutcome::AlreadyBound;
        }
        self.bound_class = Some(class);
        match class {
            ViewportClass::Mobile => {
                self.mode = BindingMode::Static;
                self.active = None;
                self.generation += 1;
                BindOutcome::Static
            }
            ViewportClass::Desktop => {
                if self.duration == DurationState::Pending {
                    self.mode = BindingMode::Deferred;
                    BindOutcome::Deferred
                } else {
                    self.activate_scroll();
                    BindOutcome::Scroll
                }
            }
        }
    }

    /// Tear down the current binding. Returns false if nothing was bound.
    pub fn unbind(&mut self) -> bool {
        if self.bound_class.is_none() {
            return false;
        }
        self.bound_class = None;
        self.mode = BindingMode::Unbound;
        self.active = None;
        true
    }

    /// Switch strategies when the viewport class changed; no-op otherwise.
    pub fn rebind(&mut self, class: ViewportClass) -> Option<BindOutcome> {
        match self.bound_class {
            Some(bound) if bound == class => None,
            _ => {
                self.unbind();
                Some(self.bind(class))
            }
        }
    }

    /// Accept the media duration. Only the first finite positive value counts.
    /// Returns `Some(Scroll)` when this completes a deferred desktop bind.
    pub fn resolve_duration(&mut self, duration_sec: f64) -> Option<BindOutcome> {
        if self.duration != DurationState::Pending {
            return None;
        }
        if !(duration_sec.is_finite() && duration_sec > 0.0) {
            return None;
        }
        self.duration = DurationState::Ready(duration_sec);
        self.complete_deferred()
    }

    /// Stop waiting for metadata. Deferred bindings activate without seeking.
    pub fn give_up_duration(&mut self) -> Option<BindOutcome> {
        if self.duration != DurationState::Pending {
            return None;
        }
        self.duration = DurationState::Unavailable;
        self.complete_deferred()
    }

    /// Every block visible; applied when entering the static fallback.
    pub fn static_transitions(&self) -> impl Iterator<Item = TextTransition> {
        (0..self.text_count).map(|index| TextTransition {
            index,
            to: Visibility::Shown,
        })
    }

    pub fn on_progress(&mut self, progress: f64, current_media_time: f64) -> SectionUpdate {
        let mut update = SectionUpdate::default();
        if self.mode != BindingMode::Scroll {
            return update;
        }

        if let DurationState::Ready(duration) = self.duration {
            let target = progress.clamp(0.0, 1.0) * duration;
            if (target - current_media_time).abs() > SEEK_HYSTERESIS_SEC {
                update.seek_to = Some(target);
            }
        }

        let next = active_index(progress, self.text_count);
        if next != self.active {
            match self.active {
                Some(prev) => update.transitions.push(TextTransition {
                    index: prev,
                    to: Visibility::Hidden,
                }),
                // Fresh activation: blocks may still be visible from the static mode.
                None => update.transitions.extend(
                    (0..self.text_count)
                        .filter(|i| Some(*i) != next)
                        .map(|index| TextTransition {
                            index,
                            to: Visibility::Hidden,
                        }),
                ),
            }
            if let Some(index) = next {
                update.transitions.push(TextTransition {
                    index,
                    to: Visibility::Shown,
                });
            }
            self.active = next;
        }
        update.active = self.active;
        update
    }

    fn activate_scroll(&mut self) {
        self.mode = BindingMode::Scroll;
        self.active = None;
        self.generation += 1;
    }

    fn complete_deferred(&mut self) -> Option<BindOutcome> {
        if self.mode == BindingMode::Deferred {
            self.activate_scroll();
            Some(BindOutcome::Scroll)
        } else {
            None
        }
    }
}
