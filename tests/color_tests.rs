use approx::assert_relative_eq;
use gfx_math::Color;

#[test]
fn test_unpack_channel_orders() {
    let rgba = Color::from_u32_rgba(0xFF2D57FF);
    assert_eq!(rgba.r, 1.0);
    assert_relative_eq!(rgba.g, 45.0 / 255.0);
    assert_relative_eq!(rgba.b, 87.0 / 255.0);
    assert_eq!(rgba.a, 1.0);

    assert_eq!(Color::from_u32_bgra(0x572DFFFF), rgba);
    assert_eq!(Color::from_u32_argb(0xFFFF2D57), rgba);
}

#[test]
fn test_pack_channel_orders() {
    let color = Color::new(1.0, 0.5, 0.25, 1.0);
    assert_eq!(color.to_u32_rgba(), 0xFF8040FF);
    assert_eq!(color.to_u32_bgra(), 0x4080FFFF);
    assert_eq!(color.to_u32_argb(), 0xFFFF8040);

    assert_eq!(Color::RED.to_u32_rgba(), 0xFF0000FF);
    assert_eq!(Color::TRANSPARENT.to_u32_argb(), 0);
}

#[test]
fn test_unpack_then_pack_is_lossless() {
    for value in [0x00000000u32, 0xFFFFFFFF, 0x12345678, 0xFF2D57FF, 0x01FE7F80] {
        assert_eq!(Color::from_u32_rgba(value).to_u32_rgba(), value);
        assert_eq!(Color::from_u32_bgra(value).to_u32_bgra(), value);
        assert_eq!(Color::from_u32_argb(value).to_u32_argb(), value);
    }
}

#[test]
fn test_packing_clamps_out_of_range_channels() {
    let color = Color::new(2.0, -1.0, 0.0, 1.5);
    assert_eq!(color.to_u32_rgba(), 0xFF0000FF);
}

#[test]
fn test_color_arithmetic() {
    let a = Color::new(0.2, 0.4, 0.6, 1.0);
    let b = Color::new(0.1, 0.1, 0.1, 0.0);

    assert_eq!(a + b, Color::new(0.3, 0.5, 0.7, 1.0));
    assert_eq!(a - b, Color::new(0.1, 0.3, 0.5, 1.0));
    assert_eq!(a * 0.5, Color::new(0.1, 0.2, 0.3, 0.5));
    assert_eq!(0.5 * a, a * 0.5);
    assert_eq!(a / 2.0, a * 0.5);
    assert_eq!(a * Color::WHITE, a);
    assert_eq!(a * Color::TRANSPARENT, Color::TRANSPARENT);

    let mut c = a;
    c += b;
    c -= b;
    assert_eq!(c, a);
    c *= 2.0;
    assert_eq!(c, a * 2.0);
}

#[test]
fn test_color_accessors() {
    let mut c = Color::rgb(0.1, 0.2, 0.3);
    assert_eq!(c.a, 1.0);
    assert_eq!(c[2], 0.3);

    c[3] = 0.5;
    assert_eq!(c.as_array(), [0.1, 0.2, 0.3, 0.5]);
    assert_eq!(Color::from([0.1, 0.2, 0.3, 0.5]), c);
    assert_eq!(Color::default(), Color::BLACK);
    assert_eq!(Color::WHITE.to_string(), "rgba(1, 1, 1, 1)");
}
