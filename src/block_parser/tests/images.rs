use super::helpers::assert_html;

#[test]
fn test_image() {
    assert_html(
        "![alt text](image.png)\n",
        "<img alt=\"alt text\" src=\"image.png\" />",
    );
}

#[test]
fn test_image_alt_is_attribute_escaped() {
    assert_html(
        "![say \"hi\" & bye](image.png)\n",
        "<img alt=\"say &quot;hi&quot; &amp; bye\" src=\"image.png\" />",
    );
}

#[test]
fn test_image_with_missing_src_brackets() {
    assert_html("![alt only]\n", "<img alt=\"alt only\" src=\"\" />");
}
