pub mod crm;
pub mod site;
