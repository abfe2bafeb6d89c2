pub mod macro_chart;
pub mod macro_list;
pub mod sidebar;
