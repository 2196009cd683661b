mod dashboard;
mod detail;
mod layout;
mod organizations;
mod table;

pub use dashboard::AdminDashboard;
pub use detail::AdminOrganizationDetail;
pub use layout::AdminLayout;
pub use organizations::AdminOrganizations;
