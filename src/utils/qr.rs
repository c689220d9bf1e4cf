//! 场次码二维码渲染

use base64::{Engine, engine::general_purpose::STANDARD};
use image::{ImageFormat, Luma};
use qrcode::QrCode;
use std::io::Cursor;

use crate::errors::Result;

/// 渲染为 PNG 字节，module_size 为每个单元的像素边长
pub fn render_png(data: &str, module_size: u32) -> Result<Vec<u8>> {
    let code = QrCode::new(data.as_bytes())?;
    let image = code
        .render::<Luma<u8>>()
        .module_dimensions(module_size, module_size)
        .build();

    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// 渲染为可直接嵌入页面的 data URL
pub fn render_data_url(data: &str, module_size: u32) -> Result<String> {
    let png = render_png(data, module_size)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_render_png_has_magic() {
        let png = render_png("K7M2QX", 4).unwrap();
        assert!(png.starts_with(&PNG_MAGIC));
    }

    #[test]
    fn test_data_url_prefix() {
        let url = render_data_url("K7M2QX", 2).unwrap();
        assert!(url.starts_with("data:image/png;base64,iVBORw0KGgo"));
    }
}
