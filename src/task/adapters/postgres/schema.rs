//! Diesel schema for task persistence.

diesel::table! {
    /// Dated to-do task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Derived task title, unique by convention at creation time.
        #[max_length = 255]
        title -> Varchar,
        /// Scheduled date in `YYYY-MM-DD` form.
        #[max_length = 10]
        active_at -> Varchar,
        /// Lifecycle status.
        #[max_length = 50]
        status -> Varchar,
    }
}
