pub mod crm;
pub mod notifications;
pub mod site;
pub mod widgets;
