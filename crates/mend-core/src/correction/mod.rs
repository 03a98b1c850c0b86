//! The fixed structural correction applied between migration attempts.
//!
//! The migration tool derives the output schema of `event_attr_values_mv`
//! itself, and the name it gives the aggregate column collides with the
//! store's internal naming for `count()`. Pre-creating the view with the
//! aggregate aliased in an inner subquery lets the next (idempotent)
//! migration run skip over it.
//!
//! Both statements are embedded `.sql` files and are sent verbatim.

/// One corrective statement, labelled for logs and the run report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrectiveStatement {
    /// Short label, e.g. `drop_view`
    pub label: &'static str,
    /// Raw SQL to execute.
    pub sql: &'static str,
}

/// The precondition table plus the two statements that repair the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrectionPlan {
    /// Table whose presence in the current database gates the correction.
    pub precondition_table: &'static str,
    /// Drops the derived view; must tolerate the view being absent.
    pub drop_view: CorrectiveStatement,
    /// Re-creates the view; must be guarded with `IF NOT EXISTS`.
    pub create_view: CorrectiveStatement,
}

/// Underlying table the view reads from.
pub const PRECONDITION_TABLE: &str = "events";

/// Derived view rebuilt by the correction.
pub const CORRECTED_VIEW: &str = "event_attr_values_mv";

/// Number of `attr_values_N` array columns folded into the view.
pub const ATTR_VALUE_COLUMNS: usize = 20;

static STANDARD: CorrectionPlan = CorrectionPlan {
    precondition_table: PRECONDITION_TABLE,
    drop_view: CorrectiveStatement {
        label: "drop_view",
        sql: include_str!("drop_event_attr_values_mv.sql"),
    },
    create_view: CorrectiveStatement {
        label: "create_view",
        sql: include_str!("create_event_attr_values_mv.sql"),
    },
};

impl CorrectionPlan {
    /// The built-in plan for `event_attr_values_mv`.
    pub fn standard() -> Self {
        STANDARD
    }

    /// Statements in execution order.
    pub fn statements(&self) -> [CorrectiveStatement; 2] {
        [self.drop_view, self.create_view]
    }
}

impl Default for CorrectionPlan {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[path = "correction_test.rs"]
mod tests;
