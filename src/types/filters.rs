//! Search filters for the admin list views.
//!
//! Lists arrive whole from the backend; filtering and paging happen on the
//! caller's side of the wire.

use chrono::NaiveDate;

use super::{Paginated, PaginationParams};
use crate::config::{DEFAULT_PAGE_SIZE, LOG_PAGE_SIZE};
use crate::domain::{ActivityLog, ActivityType, Product, User};

/// Product search box
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub search: String,
}

impl ProductFilter {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
        }
    }

    /// Name and code match case-insensitively; barcode is a plain substring
    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.search.to_lowercase();
        product.item_name.to_lowercase().contains(&needle)
            || product.item_code.to_lowercase().contains(&needle)
            || product.barcode.contains(&self.search)
    }

    pub fn page(&self, products: &[Product], page: u64) -> Paginated<Product> {
        let matching: Vec<Product> = products.iter().filter(|p| self.matches(p)).cloned().collect();
        PaginationParams::new(page, DEFAULT_PAGE_SIZE).paginate(&matching)
    }
}

/// Employee search box plus department dropdown
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub search: String,
    /// `None` means all departments
    pub department: Option<String>,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = user.employee_id.contains(&self.search)
            || user.first_name.to_lowercase().contains(&needle)
            || user.last_name.to_lowercase().contains(&needle);

        let matches_department = self
            .department
            .as_deref()
            .map_or(true, |d| user.department == d);

        matches_search && matches_department
    }

    pub fn page(&self, users: &[User], params: PaginationParams) -> Paginated<User> {
        let matching: Vec<User> = users.iter().filter(|u| self.matches(u)).cloned().collect();
        params.paginate(&matching)
    }
}

/// Activity log filter bar
#[derive(Debug, Clone, Default)]
pub struct LogFilter {
    /// `None` means every type
    pub kind: Option<ActivityType>,
    pub user: String,
    /// Inclusive, compared against the UTC date of each entry
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl LogFilter {
    pub fn matches(&self, log: &ActivityLog) -> bool {
        if self.kind.is_some_and(|kind| kind != log.kind) {
            return false;
        }

        if !log.user.to_lowercase().contains(&self.user.to_lowercase()) {
            return false;
        }

        let day = log.timestamp.date_naive();
        self.from.map_or(true, |from| day >= from) && self.to.map_or(true, |to| day <= to)
    }

    pub fn page(&self, logs: &[ActivityLog], page: u64) -> Paginated<ActivityLog> {
        let matching: Vec<ActivityLog> = logs.iter().filter(|l| self.matches(l)).cloned().collect();
        PaginationParams::new(page, LOG_PAGE_SIZE).paginate(&matching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRole;
    use chrono::{TimeZone, Utc};

    fn user(id: &str, first: &str, last: &str, department: &str) -> User {
        User {
            employee_id: id.to_string(),
            title: String::new(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            department: department.to_string(),
            role: UserRole::Staff,
            password_hash: String::new(),
            created_at: Utc::now(),
        }
    }

    fn log(kind: ActivityType, user: &str, day: u32) -> ActivityLog {
        ActivityLog {
            id: day as i32,
            kind,
            user: user.to_string(),
            details: String::new(),
            device: String::new(),
            timestamp: Utc.with_ymd_and_hms(2024, 3, day, 23, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_product_search_fields() {
        let water = Product::new("FG-001", "Drinking Water", "8851234567890");

        assert!(ProductFilter::new("water").matches(&water));
        assert!(ProductFilter::new("fg-0").matches(&water));
        assert!(ProductFilter::new("4567").matches(&water));
        assert!(!ProductFilter::new("rice").matches(&water));
        assert!(ProductFilter::default().matches(&water));
    }

    #[test]
    fn test_product_page_size() {
        let products: Vec<Product> = (0..30)
            .map(|i| Product::new(format!("FG-{i}"), "Soap", format!("88{i}")))
            .collect();

        let page = ProductFilter::default().page(&products, 2);
        assert_eq!(page.data.len(), 10);
        assert_eq!(page.meta.total_pages, 2);
    }

    #[test]
    fn test_user_department_filter() {
        let users = vec![
            user("1001", "Malee", "Suksan", "Warehouse"),
            user("1002", "Somchai", "Jaidee", "Sales"),
            user("2001", "Mali", "Thong", "Sales"),
        ];

        let filter = UserFilter {
            search: "mal".to_string(),
            department: Some("Sales".to_string()),
        };
        let page = filter.page(&users, PaginationParams::default());

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].employee_id, "2001");

        let by_id = UserFilter {
            search: "100".to_string(),
            department: None,
        };
        assert_eq!(by_id.page(&users, PaginationParams::default()).meta.total, 2);
    }

    #[test]
    fn test_log_filter_type_user_and_dates() {
        let logs = vec![
            log(ActivityType::Login, "Malee Suksan", 1),
            log(ActivityType::ScanFound, "Malee Suksan", 2),
            log(ActivityType::ScanFound, "Guest", 3),
            log(ActivityType::ScanFound, "Malee Suksan", 4),
        ];

        let filter = LogFilter {
            kind: Some(ActivityType::ScanFound),
            user: "MALEE".to_string(),
            from: NaiveDate::from_ymd_opt(2024, 3, 2),
            to: NaiveDate::from_ymd_opt(2024, 3, 3),
        };

        let page = filter.page(&logs, 1);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, 2);
        assert_eq!(page.meta.per_page, 100);
    }
}
