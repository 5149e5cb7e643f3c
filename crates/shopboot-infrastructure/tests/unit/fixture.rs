//! Temporary installations for harness tests

use shopboot_domain::{Controller, Response, Result};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const CATALOG_CONFIG: &str = r#"
http_server = "http://shop.test/"
https_server = "https://shop.test/"

[paths]
application = "catalog"
language = "catalog/language"
controller_extension = "php"

[database]
driver = "memory"
prefix = "oc_"
"#;

pub fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Catalog installation with an English pack, home and not-found controllers
/// and a product model
pub fn installation() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "admin/config.toml", CATALOG_CONFIG);
    write(
        root,
        "catalog/language/english/english.toml",
        "heading_title = \"Welcome\"\ntext_home = \"Home\"\n",
    );
    write(
        root,
        "catalog/language/deutsch/deutsch.toml",
        "heading_title = \"Willkommen\"\n",
    );
    write(root, "catalog/controller/common/home.php", "");
    write(root, "catalog/controller/error/not_found.php", "");
    write(root, "catalog/model/catalog/product.php", "");
    dir
}

/// Controller writing a fixed body
pub struct Echo(pub String);

impl Controller for Echo {
    fn execute(&mut self, response: &mut Response) -> Result<()> {
        response.set_output(self.0.clone());
        Ok(())
    }
}
