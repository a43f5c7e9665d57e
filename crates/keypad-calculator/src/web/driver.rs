//! DOM Driver - button wiring for the calculator page
//!
//! Routes clicks by the button's `data-*` attribute, reads the button text
//! the way a page handler reads `innerText`, runs the engine operation and
//! writes the display pair back into the two display elements.

use super::dom::{
    DomEvent, MockDom, CURRENT_DISPLAY_ID, DATA_CLEAR_ALL, DATA_CLEAR_DIGIT,
    DATA_CURRENT_DISPLAY, DATA_DIGIT, DATA_EQUALS, DATA_OPERATOR, DATA_PREVIOUS_DISPLAY,
    PREVIOUS_DISPLAY_ID,
};
use crate::core::{CalculatorEngine, DisplayPair, OperatorKey};
use crate::driver::CalculatorDriver;
use crate::error::{KeypadError, KeypadResult};
use crate::keypad::Button;
use tracing::debug;

/// Driver owning one engine and the page it is wired to
#[derive(Debug)]
pub struct DomDriver {
    engine: CalculatorEngine,
    dom: MockDom,
    previous_display_id: String,
    current_display_id: String,
}

impl Default for DomDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl DomDriver {
    /// Creates a driver over a fresh engine and calculator page
    #[must_use]
    pub fn new() -> Self {
        Self::with_dom(MockDom::calculator())
    }

    /// Creates a driver wired to `dom`
    ///
    /// The display elements are located by their `data-previous-display` and
    /// `data-current-display` attributes, falling back to the default ids.
    #[must_use]
    pub fn with_dom(dom: MockDom) -> Self {
        let previous_display_id = dom
            .query_selector(DATA_PREVIOUS_DISPLAY)
            .unwrap_or(PREVIOUS_DISPLAY_ID)
            .to_string();
        let current_display_id = dom
            .query_selector(DATA_CURRENT_DISPLAY)
            .unwrap_or(CURRENT_DISPLAY_ID)
            .to_string();
        let mut driver = Self {
            engine: CalculatorEngine::new(),
            dom,
            previous_display_id,
            current_display_id,
        };
        driver.sync_display();
        driver
    }

    /// Returns a reference to the engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Simulates a click on the element with `element_id`
    pub fn click(&mut self, element_id: &str) -> KeypadResult<()> {
        let button = self.resolve_button(element_id)?;
        self.dom.dispatch_event(DomEvent::click(element_id));
        debug!(element_id, %button, "click");
        button.apply_to(&mut self.engine);
        self.sync_display();
        Ok(())
    }

    /// Maps a page element onto the button it represents
    fn resolve_button(&self, element_id: &str) -> KeypadResult<Button> {
        let element = self
            .dom
            .get_element(element_id)
            .ok_or_else(|| KeypadError::UnknownElement(element_id.to_string()))?;
        let text = element.text_content.trim();

        if element.has_attr(DATA_DIGIT) {
            text.parse()
        } else if element.has_attr(DATA_OPERATOR) {
            text.parse::<OperatorKey>().map(Button::Operator)
        } else if element.has_attr(DATA_EQUALS) {
            Ok(Button::Equals)
        } else if element.has_attr(DATA_CLEAR_DIGIT) {
            Ok(Button::Delete)
        } else if element.has_attr(DATA_CLEAR_ALL) {
            Ok(Button::ClearAll)
        } else {
            Err(KeypadError::UnknownElement(element_id.to_string()))
        }
    }

    /// Writes the engine's display pair into the two display elements
    fn sync_display(&mut self) {
        let DisplayPair { previous, current } = self.engine.render_display();
        self.dom.set_element_text(&self.previous_display_id, &previous);
        self.dom.set_element_text(&self.current_display_id, &current);
    }

    /// Gets the previous-line display text
    #[must_use]
    pub fn previous_display_text(&self) -> &str {
        self.dom
            .get_element_text(&self.previous_display_id)
            .unwrap_or_default()
    }

    /// Gets the current-line display text
    #[must_use]
    pub fn current_display_text(&self) -> &str {
        self.dom
            .get_element_text(&self.current_display_id)
            .unwrap_or_default()
    }
}

impl CalculatorDriver for DomDriver {
    fn press(&mut self, button: Button) -> KeypadResult<()> {
        self.click(&button.element_id())
    }

    fn display(&self) -> DisplayPair {
        DisplayPair::new(self.previous_display_text(), self.current_display_text())
    }

    fn reset(&mut self) {
        self.engine.clear_all();
        self.dom.clear_event_history();
        self.sync_display();
    }
}
