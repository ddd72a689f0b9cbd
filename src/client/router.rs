use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{
        dashboard::{AdminDashboard, HousingDashboard, StudentDashboard},
        Home, Login, NotFound,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/auth/login")]
    Login {},

    #[nest("/dashboard")]

        #[route("/student")]
        StudentDashboard {},

        #[route("/housing")]
        HousingDashboard {},

        #[route("/admin")]
        AdminDashboard {},

    #[end_nest]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
