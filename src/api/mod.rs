// HTTP surface of the service, grouped by feature

pub mod home;
