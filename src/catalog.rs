//! Well-known Catalyst Center endpoints, listed by `help`

/// One operation on a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// A group of related endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub name: &'static str,
    pub description: &'static str,
    pub list: Operation,
    pub read: Operation,
}

pub const RESOURCES: &[Resource] = &[
    Resource {
        name: "sites",
        description: "Network sites in Catalyst Center",
        list: Operation {
            method: "GET",
            path: "/dna/intent/api/v1/site",
            description: "List all network sites",
        },
        read: Operation {
            method: "GET",
            path: "/dna/intent/api/v1/site/{siteId}",
            description: "Get details of a specific site",
        },
    },
    Resource {
        name: "devices",
        description: "Network devices in Catalyst Center",
        list: Operation {
            method: "GET",
            path: "/dna/intent/api/v1/network-device",
            description: "List all network devices",
        },
        read: Operation {
            method: "GET",
            path: "/dna/intent/api/v1/network-device/{deviceId}",
            description: "Get details of a specific device",
        },
    },
    Resource {
        name: "templates",
        description: "Configuration templates in Catalyst Center",
        list: Operation {
            method: "GET",
            path: "/dna/intent/api/v1/template-programmer/template",
            description: "List all configuration templates",
        },
        read: Operation {
            method: "GET",
            path: "/dna/intent/api/v1/template-programmer/template/{templateId}",
            description: "Get details of a specific template",
        },
    },
];

/// Find a resource by name, ignoring case
pub fn lookup(name: &str) -> Option<&'static Resource> {
    RESOURCES.iter().find(|r| r.name.eq_ignore_ascii_case(name))
}

impl Resource {
    pub fn operations(&self) -> [&Operation; 2] {
        [&self.list, &self.read]
    }
}
