use std::env;

fn main() {
    // WhatsAppの送信先番号をビルド時に埋め込む
    match env::var("EMERALD_WHATSAPP_PHONE") {
        Ok(phone) if !phone.trim().is_empty() => {
            let phone: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
            println!("cargo:warning=EMERALD_WHATSAPP_PHONE set to {}", phone);
            println!("cargo:rustc-env=EMERALD_WHATSAPP_PHONE={}", phone);
        }
        _ => {
            println!("cargo:warning=EMERALD_WHATSAPP_PHONE not set, using default number");
        }
    }

    // 環境変数変更時に再ビルド
    println!("cargo:rerun-if-env-changed=EMERALD_WHATSAPP_PHONE");
    println!("cargo:rerun-if-changed=build.rs");
}
