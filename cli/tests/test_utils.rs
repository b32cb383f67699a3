//! Upload, prompt, table and session file helpers.

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use sd_cli::{session_file::SessionFile, utils};
    use stockdesk_shared::{
        AdminError, AuthContext, Category, InventoryItem, ItemStatus, Prescription, Role,
        SessionProvider, PLACEHOLDER_IMAGE,
    };
    use tempfile::{NamedTempFile, TempDir};

    fn item(id: &str, images: Vec<String>) -> InventoryItem {
        InventoryItem {
            id: id.to_string(),
            name: "Saline spray".to_string(),
            description: "Nasal".to_string(),
            category: Category::MedicalDevices,
            brand: "Aqua".to_string(),
            pack_size: None,
            price: 5.0,
            stock: 8,
            status: ItemStatus::Active,
            prescription: Prescription::NotRequired,
            images,
            image: None,
        }
    }

    #[test]
    fn load_upload_reads_bytes_and_guesses_mime() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("pill.png");
        std::fs::write(&path, b"\x89PNG fake").expect("write image");

        let upload = utils::load_upload(&path).expect("load image");
        assert_eq!(upload.file_name, "pill.png");
        assert_eq!(upload.mime_type, "image/png");
        assert_eq!(upload.bytes, b"\x89PNG fake");
    }

    #[test]
    fn load_upload_rejects_non_images() {
        let mut file = tempfile::Builder::new()
            .suffix(".txt")
            .tempfile()
            .expect("create temp file");
        file.write_all(b"hello").expect("write file");
        let err = utils::load_upload(file.path()).expect_err("text file rejected");
        assert!(err.to_string().contains("not an image file"));
    }

    #[test]
    fn load_uploads_pairs_files_with_labels_in_order() {
        let dir = TempDir::new().expect("create temp dir");
        let paths: Vec<_> = ["b.jpg", "a.webp"]
            .iter()
            .map(|name| {
                let path = dir.path().join(name);
                std::fs::write(&path, b"img").expect("write image");
                path
            })
            .collect();

        let uploads = utils::load_uploads(&paths).expect("load images");
        let names: Vec<_> = uploads.iter().map(|(file, _)| file.file_name.as_str()).collect();
        assert_eq!(names, vec!["b.jpg", "a.webp"]);
        assert!(uploads[0].1.ends_with("b.jpg"));
    }

    #[test]
    fn confirm_accepts_only_yes() {
        assert!(utils::confirm_from(Cursor::new("y\n"), "Delete?").expect("read"));
        assert!(utils::confirm_from(Cursor::new(" YES \n"), "Delete?").expect("read"));
        assert!(!utils::confirm_from(Cursor::new("\n"), "Delete?").expect("read"));
        assert!(!utils::confirm_from(Cursor::new("nope\n"), "Delete?").expect("read"));
        assert!(!utils::confirm_from(Cursor::new(""), "Delete?").expect("read"));
    }

    #[test]
    fn table_shows_resolved_image_urls() {
        let items = vec![
            item("a1", vec!["uploads\\products\\spray.png".to_string()]),
            item("b2", Vec::new()),
        ];
        let table = utils::format_table(&items, "http://localhost:5000");
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].contains("http://localhost:5000/uploads/products/spray.png"));
        assert!(lines[1].contains("Medical Devices"));
        assert!(lines[1].contains("5.00"));
        assert!(lines[2].ends_with(PLACEHOLDER_IMAGE));
    }

    #[test]
    fn session_file_missing_fails_the_gate() {
        let dir = TempDir::new().expect("create temp dir");
        let session = SessionFile::new(dir.path().join("absent.json"));
        assert!(session.user().is_none());
        let err = AuthContext::establish(session).expect_err("no session");
        assert_eq!(err, AdminError::AuthenticationMissing);
    }

    #[test]
    fn session_file_malformed_is_treated_as_absent() {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(b"{ not json").expect("write session");
        let session = SessionFile::new(file.path());
        assert!(session.user().is_none());
        assert!(session.token().is_none());
    }

    #[test]
    fn session_file_is_reread_on_every_access() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("session.json");
        std::fs::write(
            &path,
            r#"{"user":{"id":"1","firstName":"Ada","lastName":"Admin","email":"a@x.io","role":"admin"},"token":"t1"}"#,
        )
        .expect("write session");

        let session = SessionFile::new(&path);
        let ctx = AuthContext::establish(session).expect("admin session");
        assert_eq!(ctx.user().role, Role::Admin);
        assert_eq!(ctx.bearer_token().as_deref(), Ok("t1"));

        std::fs::write(&path, r#"{"user":null,"token":null}"#).expect("log out");
        assert_eq!(ctx.bearer_token(), Err(AdminError::AuthenticationMissing));
    }
}
