use std::fs;
use std::path::Path;

const PLACEHOLDER: &str = "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head><meta charset=\"utf-8\" /><title>Recicla Ebenezer</title></head>\n<body><p>Frontend not built. Run <code>trunk build --release</code> in <code>frontend/</code>.</p></body>\n</html>\n";

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).expect("create static dir");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
            .expect("copy frontend dist");
    } else {
        let embedded = out_dir.join("dist");
        let index = embedded.join("index.html");
        if !index.exists() {
            fs::create_dir_all(&embedded).expect("create static/dist");
            fs::write(&index, PLACEHOLDER).expect("write placeholder index.html");
        }
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
