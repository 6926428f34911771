mod category_advisor;

pub use category_advisor::CategoryAdvisor;
