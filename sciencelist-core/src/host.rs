/// Host facilities the lifecycle core depends on.
///
/// Readiness is exposed as explicit queries instead of null-until-ready
/// globals; the readiness-wait task polls them once per tick. Launcher
/// callback registration is symmetric: whatever `add_launcher_callbacks`
/// subscribes, `remove_launcher_callbacks` must unsubscribe.
pub trait HostServices {
    fn add_launcher_callbacks(&mut self);
    fn remove_launcher_callbacks(&mut self);
    /// Whether the research subsystem has finished loading.
    fn research_ready(&self) -> bool;
    /// Whether the part catalog has finished loading.
    fn part_catalog_ready(&self) -> bool;
}
