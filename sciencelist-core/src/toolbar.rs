/// Contract of the launcher toolbar button.
///
/// The button raises opened/closed notifications through
/// `AddonController::button_opened` / `button_closed`; this trait covers the
/// calls flowing the other way.
pub trait ToolbarButton {
    fn add(&mut self);
    fn remove(&mut self);
    fn set_on(&mut self);
    fn set_off(&mut self);
}
