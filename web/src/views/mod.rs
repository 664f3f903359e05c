mod profile;
pub use profile::Profile;

mod notifications;
pub use notifications::Notifications;

mod billing;
pub use billing::Billing;

mod plans;
pub use plans::Plans;
