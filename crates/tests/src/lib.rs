#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod organization_list_tests;

#[cfg(test)]
mod organization_decision_tests;

#[cfg(test)]
mod organization_role_tests;

#[cfg(test)]
mod health_tests;

#[cfg(test)]
mod postgres_directory_tests;
