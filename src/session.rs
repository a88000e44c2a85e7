//! Calculator Session
//!
//! The whole application state as one value: which page is showing, the
//! current input record, and whether results were requested. Every
//! transition consumes the session and returns its successor.

use crate::categories::default_categories;
use crate::data::{CarbonData, Field};
use crate::input::{self, InputError};
use crate::report::{FootprintReport, ReportGenerator};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Loading,
    Home,
    Calculator,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub page: Page,
    pub data: CarbonData,
    /// Results were requested for the current record
    pub submitted: bool,
}

/// What the calculator page should render below the form
#[derive(Debug, Clone, PartialEq)]
pub enum CalculatorView {
    /// Form only, no results requested yet (or not on the calculator page)
    Editing,
    /// Results requested but nothing entered
    NoData,
    Results(Box<FootprintReport>),
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn finish_loading(self) -> Self {
        match self.page {
            Page::Loading => Session { page: Page::Home, ..self },
            _ => self,
        }
    }

    /// Opening the calculator starts from an empty form
    #[must_use]
    pub fn open_calculator(self) -> Self {
        Session {
            page: Page::Calculator,
            data: CarbonData::default(),
            submitted: false,
        }
    }

    /// Leaving the calculator discards the record
    #[must_use]
    pub fn go_home(self) -> Self {
        Session {
            page: Page::Home,
            data: CarbonData::default(),
            submitted: false,
        }
    }

    /// Free-text edit of one field
    #[must_use]
    pub fn update_text(self, field: Field, text: &str) -> Self {
        Session {
            data: input::apply_text(self.data, field, text),
            ..self
        }
    }

    /// Option selection for one field
    pub fn select(self, field: Field, index: usize) -> Result<Self, InputError> {
        Ok(Session {
            data: input::apply_selection(self.data, field, index)?,
            ..self
        })
    }

    #[must_use]
    pub fn submit(self) -> Self {
        if self.page != Page::Calculator {
            return self;
        }
        Session { submitted: true, ..self }
    }

    /// Back to an empty form on the calculator page
    #[must_use]
    pub fn reset(self) -> Self {
        self.open_calculator()
    }

    pub fn view(&self) -> CalculatorView {
        if self.page != Page::Calculator || !self.submitted {
            return CalculatorView::Editing;
        }
        match ReportGenerator::generate(&self.data, default_categories()) {
            Some(report) => CalculatorView::Results(Box::new(report)),
            None => CalculatorView::NoData,
        }
    }
}
