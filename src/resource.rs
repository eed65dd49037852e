//! Static descriptors for the five API resources. All share one schema and
//! one endpoint shape, so handlers resolve the descriptor from the request
//! path instead of repeating the controller five times.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    /// Path segment for single-row routes, e.g. `product` in `/product/:id`.
    pub slug: &'static str,
    /// Path segment for the list route, e.g. `products` in `GET /products`.
    pub plural: &'static str,
    /// Table name. Identifiers are quoted when building SQL (`order` is a
    /// reserved word).
    pub table: &'static str,
    /// Display name used in response messages.
    pub label: &'static str,
}

pub const RESOURCES: [Resource; 5] = [
    Resource {
        slug: "customer",
        plural: "customers",
        table: "customer",
        label: "Customer",
    },
    Resource {
        slug: "invoice",
        plural: "invoices",
        table: "invoice",
        label: "Invoice",
    },
    Resource {
        slug: "order",
        plural: "orders",
        table: "order",
        label: "Order",
    },
    Resource {
        slug: "product",
        plural: "products",
        table: "product",
        label: "Product",
    },
    Resource {
        slug: "shipment",
        plural: "shipments",
        table: "shipment",
        label: "Shipment",
    },
];

impl Resource {
    pub fn by_slug(segment: &str) -> Option<&'static Resource> {
        RESOURCES.iter().find(|r| r.slug == segment)
    }

    pub fn by_plural(segment: &str) -> Option<&'static Resource> {
        RESOURCES.iter().find(|r| r.plural == segment)
    }

    /// Label in lowercase for use inside validation messages.
    pub fn label_lower(&self) -> String {
        self.label.to_lowercase()
    }
}
