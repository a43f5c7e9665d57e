//! Mock DOM for the calculator page
//!
//! Stands in for the browser so the button wiring can be exercised
//! without web bindings. Elements are looked up by id, and by the `data-*`
//! attributes the page uses to tag its buttons and displays.

use crate::keypad::{Button, Keypad};
use std::collections::HashMap;

/// Attribute on buttons that append to the entry (digits and `.`)
pub const DATA_DIGIT: &str = "data-digit";
/// Attribute on operator buttons
pub const DATA_OPERATOR: &str = "data-operator";
/// Attribute on the equals button
pub const DATA_EQUALS: &str = "data-equals";
/// Attribute on the delete button
pub const DATA_CLEAR_DIGIT: &str = "data-clear-digit";
/// Attribute on the all-clear button
pub const DATA_CLEAR_ALL: &str = "data-clear-all";
/// Attribute on the previous-line display
pub const DATA_PREVIOUS_DISPLAY: &str = "data-previous-display";
/// Attribute on the current-line display
pub const DATA_CURRENT_DISPLAY: &str = "data-current-display";

/// Element id of the previous-line display
pub const PREVIOUS_DISPLAY_ID: &str = "previous-display";
/// Element id of the current-line display
pub const CURRENT_DISPLAY_ID: &str = "current-display";

/// Id of the calculator page's root element
pub const CALCULATOR_ROOT_ID: &str = "calculator";

/// Represents a DOM element
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content (`innerText`)
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Checks if element carries an attribute
    #[must_use]
    pub fn has_attr(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Finds this element or a descendant by ID, depth first
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&DomElement> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_id(id))
    }
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }
}

/// Mock DOM holding the calculator page
///
/// Elements live in one flat list indexed by id. The parent/child links are
/// kept separately, so [`MockDom::tree`] always reflects the current text of
/// every element.
#[derive(Debug, Default)]
pub struct MockDom {
    /// Elements by ID, in insertion order
    elements: Vec<DomElement>,
    index: HashMap<String, usize>,
    child_ids: HashMap<String, Vec<String>>,
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the calculator page: two displays and one button per key
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();

        dom.register_element(
            DomElement::new("div")
                .with_id(CALCULATOR_ROOT_ID)
                .with_class("calculator-grid"),
        );
        dom.append_child(
            CALCULATOR_ROOT_ID,
            DomElement::new("div").with_id("output").with_class("output"),
        );
        dom.append_child(
            "output",
            DomElement::new("div")
                .with_id(PREVIOUS_DISPLAY_ID)
                .with_class("previous-operand")
                .with_attr(DATA_PREVIOUS_DISPLAY, ""),
        );
        dom.append_child(
            "output",
            DomElement::new("div")
                .with_id(CURRENT_DISPLAY_ID)
                .with_class("current-operand")
                .with_attr(DATA_CURRENT_DISPLAY, ""),
        );

        for placed in Keypad::new().buttons() {
            dom.append_child(
                CALCULATOR_ROOT_ID,
                DomElement::new("button")
                    .with_id(&placed.button.element_id())
                    .with_text(&placed.button.label())
                    .with_class("keypad-btn")
                    .with_attr(data_attribute(placed.button), ""),
            );
        }

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if element.id.is_empty() {
            return;
        }
        match self.index.get(&element.id) {
            Some(&slot) => self.elements[slot] = element,
            None => {
                self.index.insert(element.id.clone(), self.elements.len());
                self.elements.push(element);
            }
        }
    }

    /// Registers an element as the last child of `parent_id`
    pub fn append_child(&mut self, parent_id: &str, element: DomElement) {
        if element.id.is_empty() {
            return;
        }
        let children = self.child_ids.entry(parent_id.to_string()).or_default();
        if !children.contains(&element.id) {
            children.push(element.id.clone());
        }
        self.register_element(element);
    }

    /// Assembles the element tree below `id` from the current element state
    #[must_use]
    pub fn tree(&self, id: &str) -> Option<DomElement> {
        let element = self.get_element(id)?.clone();
        let children = self.child_ids.get(id).map(Vec::as_slice).unwrap_or_default();
        Some(
            children
                .iter()
                .filter_map(|child| self.tree(child))
                .fold(element, DomElement::with_child),
        )
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.index.get(id).map(|&slot| &self.elements[slot])
    }

    /// Returns the ids of all elements carrying `attribute`, in page order
    #[must_use]
    pub fn query_selector_all(&self, attribute: &str) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|e| e.has_attr(attribute))
            .map(|e| e.id.as_str())
            .collect()
    }

    /// Returns the id of the first element carrying `attribute`
    #[must_use]
    pub fn query_selector(&self, attribute: &str) -> Option<&str> {
        self.elements
            .iter()
            .find(|e| e.has_attr(attribute))
            .map(|e| e.id.as_str())
    }

    /// Records an event
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(&slot) = self.index.get(id) {
            self.elements[slot].set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.get_element(id).map(|e| e.text_content.as_str())
    }
}

/// The `data-*` attribute the page puts on a button
fn data_attribute(button: Button) -> &'static str {
    match button {
        Button::Digit(_) | Button::Decimal => DATA_DIGIT,
        Button::Operator(_) => DATA_OPERATOR,
        Button::Equals => DATA_EQUALS,
        Button::Delete => DATA_CLEAR_DIGIT,
        Button::ClearAll => DATA_CLEAR_ALL,
    }
}
