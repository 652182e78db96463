/// Contract of the checklist window component.
///
/// The lifecycle core never renders anything; it only flips visibility and
/// asks the window to bring different layers of its content up to date:
/// a full cache rebuild re-reads the whole experiment catalog, an incremental
/// update re-reads completion state, a filter refresh re-derives the visible
/// subset, and a situation recalculation re-evaluates the current craft
/// context.
pub trait ChecklistWindow {
    fn is_visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);
    fn refresh_experiment_cache(&mut self);
    fn update_experiments(&mut self);
    fn refresh_filter(&mut self);
    fn recalculate_situation(&mut self);
}
