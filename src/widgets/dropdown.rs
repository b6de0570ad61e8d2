use super::pointer::{Bounds, PointerEvents, PointerSubscription};

/// A fixed option a dropdown can offer.
pub trait DropdownOption: Copy + PartialEq + Send + Sync + 'static {
    fn all() -> &'static [Self];
    /// Value written into the form and sent to the backend.
    fn value(self) -> &'static str;
    /// Text shown in the menu.
    fn label(self) -> &'static str {
        self.value()
    }
}

/// Custom select control.
///
/// While open it holds a subscription on the document pointer bus and closes
/// itself on the first pointer-down outside its bounds. The subscription is
/// released on close and when the dropdown is dropped.
#[derive(Debug)]
pub struct Dropdown<T: DropdownOption> {
    events: PointerEvents,
    bounds: Bounds,
    selected: Option<T>,
    listener: Option<PointerSubscription>,
}

impl<T: DropdownOption> Dropdown<T> {
    pub fn new(events: &PointerEvents, bounds: Bounds) -> Self {
        Self {
            events: events.clone(),
            bounds,
            selected: None,
            listener: None,
        }
    }

    pub fn options(&self) -> &'static [T] {
        T::all()
    }

    pub fn selected(&self) -> Option<T> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.listener.is_some()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Trigger click.
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.listener = Some(self.events.subscribe());
        }
    }

    pub fn close(&mut self) {
        self.listener = None;
    }

    /// Picks `option` and closes the menu.
    pub fn select(&mut self, option: T) -> T {
        self.selected = Some(option);
        self.close();
        option
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.close();
    }

    /// Applies pointer-downs seen since the last call. Returns true when an
    /// outside click closed the menu.
    pub fn handle_pointer_events(&mut self) -> bool {
        let Some(listener) = self.listener.as_mut() else {
            return false;
        };
        let bounds = self.bounds;
        let clicked_outside = listener.drain().iter().any(|ev| !bounds.contains(ev));
        if clicked_outside {
            self.close();
        }
        clicked_outside
    }

    /// Text for the trigger button.
    pub fn trigger_label(&self, placeholder: &'static str) -> &'static str {
        self.selected.map(T::label).unwrap_or(placeholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::offer_dto::ContractType;
    use crate::widgets::pointer::PointerEvent;

    fn dropdown(bus: &PointerEvents) -> Dropdown<ContractType> {
        Dropdown::new(bus, Bounds::new(0.0, 0.0, 200.0, 40.0))
    }

    #[test]
    fn listener_only_registered_while_open() {
        let bus = PointerEvents::new();
        let mut dd = dropdown(&bus);
        assert_eq!(bus.listener_count(), 0);

        dd.toggle();
        assert!(dd.is_open());
        assert_eq!(bus.listener_count(), 1);

        dd.toggle();
        assert!(!dd.is_open());
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn outside_click_closes() {
        let bus = PointerEvents::new();
        let mut dd = dropdown(&bus);
        dd.toggle();

        bus.dispatch(PointerEvent::at(50.0, 20.0));
        assert!(!dd.handle_pointer_events());
        assert!(dd.is_open());

        bus.dispatch(PointerEvent::at(500.0, 300.0));
        assert!(dd.handle_pointer_events());
        assert!(!dd.is_open());
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn clicks_while_closed_are_ignored() {
        let bus = PointerEvents::new();
        let mut dd = dropdown(&bus);
        bus.dispatch(PointerEvent::at(500.0, 300.0));
        assert!(!dd.handle_pointer_events());

        dd.toggle();
        assert!(!dd.handle_pointer_events());
        assert!(dd.is_open());
    }

    #[test]
    fn select_closes_and_records_choice() {
        let bus = PointerEvents::new();
        let mut dd = dropdown(&bus);
        dd.toggle();
        assert_eq!(dd.select(ContractType::FixedTerm), ContractType::FixedTerm);
        assert!(!dd.is_open());
        assert_eq!(dd.selected(), Some(ContractType::FixedTerm));
        assert_eq!(dd.trigger_label("Choisir un contrat"), "CDD");
    }

    #[test]
    fn dropping_an_open_dropdown_unregisters() {
        let bus = PointerEvents::new();
        let mut dd = dropdown(&bus);
        dd.toggle();
        assert_eq!(bus.listener_count(), 1);
        drop(dd);
        assert_eq!(bus.listener_count(), 0);
    }
}
