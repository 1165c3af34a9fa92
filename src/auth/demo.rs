/// A fixed account that logs straight into a persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoUser {
    pub email: &'static str,
    pub password: &'static str,
    pub id: &'static str,
    pub organization_id: &'static str,
    pub role: &'static str,
    pub persona: &'static str,
}

const DEMO_PASSWORD: &str = "DemoPass123!";

pub static DEMO_USERS: &[DemoUser] = &[
    DemoUser {
        email: "demo.customer@ayr.com",
        password: DEMO_PASSWORD,
        id: "demo_customer_001",
        organization_id: "demo_org_customer",
        role: "customer",
        persona: "first-time-customer",
    },
    DemoUser {
        email: "demo.medical@ayr.com",
        password: DEMO_PASSWORD,
        id: "demo_medical_001",
        organization_id: "demo_org_medical",
        role: "customer",
        persona: "medical-patient",
    },
    DemoUser {
        email: "demo.regular@ayr.com",
        password: DEMO_PASSWORD,
        id: "demo_regular_001",
        organization_id: "demo_org_regular",
        role: "customer",
        persona: "regular-shopper",
    },
    DemoUser {
        email: "demo.browser@ayr.com",
        password: DEMO_PASSWORD,
        id: "demo_browser_001",
        organization_id: "demo_org_browser",
        role: "customer",
        persona: "curious-browser",
    },
    DemoUser {
        email: "demo.manager@ayr.com",
        password: DEMO_PASSWORD,
        id: "demo_manager_001",
        organization_id: "demo_org_manager",
        role: "admin",
        persona: "store-manager",
    },
    DemoUser {
        email: "demo.clerk@ayr.com",
        password: DEMO_PASSWORD,
        id: "demo_clerk_001",
        organization_id: "demo_org_clerk",
        role: "staff",
        persona: "inventory-clerk",
    },
    DemoUser {
        email: "demo.admin@ayr.com",
        password: DEMO_PASSWORD,
        id: "demo_admin_001",
        organization_id: "demo_org_admin",
        role: "admin",
        persona: "admin-user",
    },
];

/// Exact, case-sensitive lookup by email.
pub fn find_demo_user(email: &str) -> Option<&'static DemoUser> {
    DEMO_USERS.iter().find(|u| u.email == email)
}
