pub mod admin;
pub mod home;
pub mod login;
pub mod not_found;
pub mod organization;
pub mod user_dashboard;

use dioxus::prelude::*;
use shared_types::Role;

use crate::guard::RoleGate;
use admin::{AdminDashboard, AdminLayout, AdminOrganizationDetail, AdminOrganizations};
use home::Home;
use login::Login;
use not_found::NotFound;
use organization::{OrganizationCases, OrganizationDashboard, OrganizationLayout, OrganizationProfile};
use user_dashboard::UserDashboard;

/// Application routes.
///
/// Each role's pages sit under a guard layout that requires that role, so a
/// page body never renders before its session is confirmed.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/admin", || Route::AdminDashboard {})]
    #[redirect("/organization", || Route::OrganizationDashboard {})]
    #[route("/")]
    Home {},
    #[route("/auth/login")]
    Login {},

    #[layout(AdminGuard)]
        #[layout(AdminLayout)]
            #[route("/admin/dashboard")]
            AdminDashboard {},
            #[route("/admin/organizations")]
            AdminOrganizations {},
            #[route("/admin/organizations/:id")]
            AdminOrganizationDetail { id: String },
        #[end_layout]
    #[end_layout]

    #[layout(OrganizationGuard)]
        #[layout(OrganizationLayout)]
            #[route("/organization/dashboard")]
            OrganizationDashboard {},
            #[route("/organization/cases")]
            OrganizationCases {},
            #[route("/organization/profile")]
            OrganizationProfile {},
        #[end_layout]
    #[end_layout]

    #[layout(UserGuard)]
        #[route("/dashboard")]
        UserDashboard {},
    #[end_layout]

    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn AdminGuard() -> Element {
    rsx! {
        RoleGate { required: Role::Admin, Outlet::<Route> {} }
    }
}

#[component]
fn OrganizationGuard() -> Element {
    rsx! {
        RoleGate { required: Role::Organization, Outlet::<Route> {} }
    }
}

#[component]
fn UserGuard() -> Element {
    rsx! {
        RoleGate { required: Role::User, Outlet::<Route> {} }
    }
}
