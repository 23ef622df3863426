//! On-disk Java fixtures for command tests.

use std::fs;
use std::path::PathBuf;

use indoc::indoc;
use tempfile::TempDir;

/// Source root of every fixture project, relative to its temp dir.
pub const SOURCE_ROOT: &str = "server/src/main/java";

/// A small shop model: a class hierarchy, an enum with values, a cycle
/// through a nested class, and an interface that is never translated.
pub const SHOP: &[(&str, &str)] = &[
    (
        "com/shop/model/Entity.java",
        "package com.shop.model; public class Entity { public long id; }",
    ),
    (
        "com/shop/model/Customer.java",
        indoc! {"
            package com.shop.model;

            import java.util.List;

            public class Customer extends Entity {
                private String password;
                public String name;
                public List<Order> orders;
            }
        "},
    ),
    (
        "com/shop/model/Order.java",
        indoc! {"
            package com.shop.model;

            public class Order {
                public Customer customer;
                public OrderStatus status;
            }
        "},
    ),
    (
        "com/shop/model/OrderStatus.java",
        indoc! {r#"
            package com.shop.model;

            public enum OrderStatus {
                OPEN("open"),
                SHIPPED("shipped"),
                LOST;

                OrderStatus() { this(null); }
                OrderStatus(String code) {}
            }
        "#},
    ),
    (
        "com/shop/service/CustomerService.java",
        "package com.shop.service; public interface CustomerService {}",
    ),
];

/// Write `files` under `<tmp>/SOURCE_ROOT` and return the temp dir.
pub fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (path, text) in files {
        let file = dir.path().join(SOURCE_ROOT).join(path);
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(file, text).unwrap();
    }
    dir
}

pub fn classpath(dir: &TempDir) -> Vec<PathBuf> {
    vec![dir.path().join(SOURCE_ROOT)]
}
