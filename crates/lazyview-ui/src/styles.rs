//! Styles for the lazy image placeholder.

pub const LAZY_IMAGE_STYLES: &str = r#"
.lazy-image {
  position: relative;
  display: inline-block;
  overflow: hidden;
}

.lazy-image__img {
  display: block;
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.lazy-image__placeholder {
  position: absolute;
  inset: 0;
  background: #1a1a1a;
  animation: lazy-image-pulse 1.5s ease-in-out infinite;
}

@keyframes lazy-image-pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.4; }
}
"#;
