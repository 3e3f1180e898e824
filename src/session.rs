//! Builder edit session
//!
//! Owns the mutable state of one open builder: the selected shape, the
//! field values, the active exclusive group, the transient conflict notice,
//! and the pending delayed actions. Everything here is synchronous; the two
//! delayed behaviors (clearing a notice, auto-closing after a genomic-slot
//! conflict) are deadline records the host UI polls with its own clock, so
//! closing or reopening the builder can never fire a stale action.

use crate::fields::{ExclusiveGroup, Field, FieldSet};
use crate::filter::{AppliedFilterSet, Conflict, GenomicFilter};
use crate::params;
use crate::registry::QueryTypeRegistry;
use crate::shape::QueryShape;
use crate::validate::{self, ValidationReport};
use crate::Result;
use std::time::{Duration, Instant};

/// How long a conflict notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Delay before the builder force-closes after a genomic-slot conflict.
pub const AUTO_CLOSE_DELAY: Duration = Duration::from_secs(3);

/// Transient user-facing notice after a rejected submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Duplicate,
    GenomicSlotOccupied,
}

impl Notice {
    /// Message text shown by the UI.
    pub fn text(&self) -> &'static str {
        match self {
            Notice::Duplicate => "This query has already been added.",
            Notice::GenomicSlotOccupied => {
                "Only one genomic query can be active at a time. Remove the existing one first."
            }
        }
    }
}

/// A delayed action the host should perform when its deadline passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledAction {
    /// Dismiss the transient notice.
    ClearNotice,
    /// Close the builder, discarding in-progress edits.
    CloseBuilder,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    action: ScheduledAction,
    due: Instant,
}

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The filter was accepted; the session has been reset.
    Accepted { identity: String },
    /// Input did not validate; nothing was built or proposed.
    Invalid(ValidationReport),
    /// The filter set rejected the proposal; a notice is showing and the
    /// matching delayed actions are scheduled.
    Rejected(Conflict),
}

/// One open builder dialog's worth of state.
#[derive(Debug, Clone)]
pub struct BuilderSession {
    shape: QueryShape,
    default_shape: QueryShape,
    fields: FieldSet,
    active_group: ExclusiveGroup,
    notice: Option<Notice>,
    pending: Vec<Pending>,
}

impl BuilderSession {
    /// Fresh session starting from the registry's default shape.
    pub fn new(registry: &QueryTypeRegistry) -> Self {
        let shape = registry.default_shape();
        Self {
            shape,
            default_shape: shape,
            fields: FieldSet::new(),
            active_group: ExclusiveGroup::VariationType,
            notice: None,
            pending: Vec::new(),
        }
    }

    /// Session opened to edit an existing filter. Prefill only applies when
    /// the filter's shape is still enabled; otherwise the session starts
    /// empty on the default shape.
    pub fn with_prefill(registry: &QueryTypeRegistry, filter: &GenomicFilter) -> Self {
        let mut session = Self::new(registry);
        if registry.is_enabled(filter.shape()) {
            session.shape = filter.shape();
            session.fields = params::rehydrate(filter.shape(), filter);
        }
        session
    }

    pub fn shape(&self) -> QueryShape {
        self.shape
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn active_group(&self) -> ExclusiveGroup {
        self.active_group
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Switch shapes. The field set is replaced whole, the active group
    /// resets, and any pending delayed action is cancelled; an in-progress
    /// prefill never survives a shape change.
    pub fn select_shape(&mut self, shape: QueryShape) {
        self.shape = shape;
        self.fields = FieldSet::new();
        self.active_group = ExclusiveGroup::VariationType;
        self.notice = None;
        self.pending.clear();
    }

    /// Record the user's last exclusive-group interaction.
    pub fn set_active_group(&mut self, group: ExclusiveGroup) {
        self.active_group = group;
    }

    /// Update a single field value.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Current validation state; pure and cheap, run after every change.
    pub fn validation(&self) -> ValidationReport {
        validate::validate(self.shape, &self.fields, self.active_group)
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        validate::submission_enabled(self.shape, &self.fields, self.active_group)
    }

    /// Attempt to submit the current edit as a new genomic filter.
    ///
    /// `now` is the host clock reading used to schedule delayed actions.
    /// An `Err` here is an internal invariant violation (the builder let an
    /// un-validated field set through), never a user error.
    pub fn submit(
        &mut self,
        filters: &mut AppliedFilterSet,
        now: Instant,
    ) -> Result<SubmitOutcome> {
        let report = self.validation();
        if !report.is_valid() || self.fields.is_empty() {
            return Ok(SubmitOutcome::Invalid(report));
        }

        let built = params::build(self.shape, &self.fields, self.active_group)?;
        let filter = GenomicFilter::from_params(built);
        let identity = filter.identity().to_string();

        match filters.propose(filter) {
            Ok(()) => {
                self.reset();
                Ok(SubmitOutcome::Accepted { identity })
            }
            Err(conflict) => {
                self.notice = Some(match conflict {
                    Conflict::Duplicate { .. } => Notice::Duplicate,
                    Conflict::GenomicSlotOccupied { .. } => Notice::GenomicSlotOccupied,
                });
                self.pending.push(Pending {
                    action: ScheduledAction::ClearNotice,
                    due: now + NOTICE_TTL,
                });
                if matches!(conflict, Conflict::GenomicSlotOccupied { .. }) {
                    // The occupied slot is authoritative; show the message,
                    // then close out from under the user.
                    self.pending.push(Pending {
                        action: ScheduledAction::CloseBuilder,
                        due: now + AUTO_CLOSE_DELAY,
                    });
                }
                Ok(SubmitOutcome::Rejected(conflict))
            }
        }
    }

    /// Pop every delayed action whose deadline has passed, earliest first.
    /// `ClearNotice` also clears the session's notice itself.
    pub fn poll(&mut self, now: Instant) -> Vec<ScheduledAction> {
        let mut due: Vec<Pending> = Vec::new();
        self.pending.retain(|p| {
            if p.due <= now {
                due.push(*p);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|p| p.due);

        let actions: Vec<ScheduledAction> = due.iter().map(|p| p.action).collect();
        if actions.contains(&ScheduledAction::ClearNotice) {
            self.notice = None;
        }
        actions
    }

    /// Close the builder: discard edits and cancel everything pending.
    pub fn close(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.shape = self.default_shape;
        self.fields = FieldSet::new();
        self.active_group = ExclusiveGroup::VariationType;
        self.notice = None;
        self.pending.clear();
    }
}
