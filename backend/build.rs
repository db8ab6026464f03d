use std::fs;
use std::path::Path;

// Embeds the frontend bundle when it has been built (`trunk build` in
// ../frontend). Without it the placeholder page in static/dist is served.
fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.join("index.html").exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).expect("create static dir");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new()
                .overwrite(true)
                .copy_inside(true),
        )
        .expect("copy frontend bundle");
    } else {
        println!("cargo:warning=frontend/dist not found, serving placeholder page");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
