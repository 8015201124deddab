pub mod back_to_top;
pub mod icons;
pub mod navigation;
pub mod sidebar;
pub mod typewriter;
