//! Built-in navigation tables.

use crate::menu::types::MenuItem;

/// The admin-area navigation tree. Role tags use the wire spelling
/// (`admin`, `operation`, `user`); see [`client::session::Role`].
pub fn admin_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new("user_management", "User Management", "el-icon-user")
            .with_roles(&["admin"])
            .with_children(vec![
                MenuItem::new("users", "User List", "el-icon-user-solid")
                    .with_path("/admin/users.html")
                    .with_roles(&["admin"]),
            ]),
        MenuItem::new("happiness_survey", "Well-being Survey", "el-icon-s-data")
            .with_path("/admin/happiness_survey.html")
            .with_roles(&["admin", "operation"]),
        MenuItem::new("data_analysis", "Data Analysis", "el-icon-s-marketing")
            .with_path("/admin/data_analysis.html")
            .with_roles(&["admin", "operation"]),
        MenuItem::new(
            "happiness_prediction",
            "Well-being Prediction",
            "el-icon-magic-stick",
        )
        .with_path("/admin/happiness_prediction.html")
        .with_roles(&["admin", "operation"]),
    ]
}

/// The public (front) navigation tree. Currently empty; pages link to
/// each other directly.
pub fn front_menu() -> Vec<MenuItem> {
    Vec::new()
}
