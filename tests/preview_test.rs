use eh_detail::cache_key::is_normal_preview_key;
use eh_detail::{
    parse, parse_pages, parse_preview_page, parse_preview_pages, parse_preview_set, Clip, Error, PreviewSet,
};

const FIXTURE: &str = include_str!("fixtures/gallery_detail.html");

const SPRITE_PAGE: &str = r#"<table class="ptt"><tr><td onclick="sp(0)">&lt;</td><td onclick="sp(0)"><a href="https://e-hentai.org/g/77/abcdef0123/">1</a></td><td onclick="sp(0)"><a href="https://e-hentai.org/g/77/abcdef0123/?p=1">2</a></td><td onclick="sp(2)"><a href="https://e-hentai.org/g/77/abcdef0123/?p=2">3</a></td><td onclick="sp(1)"><a href="https://e-hentai.org/g/77/abcdef0123/?p=1">&gt;</a></td></tr></table>
<div id="gdt"><a href="https://e-hentai.org/s/aaaa/77-21"><div><div title="Page 21: 021.jpg" style="width:100px;height:142px;background:transparent url(https://ehgt.org/m/000077/77-01.jpg) -0px 0 no-repeat"></div></div></a><a href="https://e-hentai.org/s/bbbb/77-22"><div><div title="Page 22: 022.jpg" style="width:100px;height:139px;background:transparent url(https://ehgt.org/m/000077/77-01.jpg) -100px 0 no-repeat"></div></div></a></div>"#;

#[test]
fn fixture_large_previews() {
    let gd = parse(FIXTURE).expect("parse fixture");

    assert_eq!(gd.preview_pages, 2);
    let PreviewSet::Large(tiles) = &gd.preview_set else {
        panic!("expected large previews, got {:?}", gd.preview_set);
    };
    assert_eq!(tiles.len(), 3);
    assert_eq!(tiles[2].position, 2);
    assert_eq!(tiles[2].url, "https://ehgt.org/w/01/234/3c4d5e6f70-2345678-3.webp");
    assert_eq!(tiles[2].page_url, "https://e-hentai.org/s/3c4d5e6f70/2345678-3");
}

#[test]
fn large_preview_addressing() {
    let gd = parse(FIXTURE).expect("parse fixture");

    let preview = gd.preview_set.preview(gd.gid, 1).expect("second preview");
    assert_eq!(preview.position, 1);
    assert_eq!(preview.clip, None);
    assert_eq!(preview.image_key, "preview:large:2345678:1");
    assert_eq!(gd.preview_set.page_url(0), Some("https://e-hentai.org/s/1a2b3c4d5e/2345678-1"));
    assert_eq!(gd.preview_set.position(3), None);
    assert_eq!(gd.preview_set.previews(gd.gid).len(), 3);
}

#[test]
fn sprite_page_previews() {
    let (set, pages) = parse_preview_page(SPRITE_PAGE).expect("preview page");

    assert_eq!(pages, 3);
    let PreviewSet::Normal(tiles) = &set else {
        panic!("expected sprite previews, got {set:?}");
    };
    assert_eq!(tiles.len(), 2);
    assert_eq!(tiles[0].position, 20);
    assert_eq!(tiles[1].offset_x, 100);

    let preview = set.preview(77, 1).expect("second tile");
    assert_eq!(
        preview.clip,
        Some(Clip {
            x: 100,
            y: 0,
            width: 100,
            height: 139,
        })
    );
    // Plain CDN sprites carry no H@H signature and key on their URL
    assert_eq!(preview.image_key, "https://ehgt.org/m/000077/77-01.jpg");
}

#[test]
fn sprite_keys_are_shared_between_tiles() {
    let set = parse_preview_set(SPRITE_PAGE).expect("previews");
    let previews = set.previews(77);

    assert_eq!(previews[0].image_key, previews[1].image_key);
}

#[test]
fn raw_page_counts() {
    assert_eq!(parse_preview_pages(FIXTURE), Ok(2));
    assert_eq!(parse_pages(FIXTURE), Ok(1024));
    assert_eq!(parse_preview_pages(SPRITE_PAGE), Ok(3));
}

#[test]
fn raw_page_counts_fail_without_markup() {
    assert!(matches!(parse_pages("<div>Length: unknown</div>"), Err(Error::Parse(_))));
    assert!(matches!(parse_preview_pages("<div></div>"), Err(Error::Parse(_))));
}

#[test]
fn hath_sprite_keys_use_signature() {
    let body = SPRITE_PAGE.replace(
        "https://ehgt.org/m/000077/77-01.jpg",
        "https://abc.xyz.hath.network/cm/0123abcd-456/77-1.webp",
    );
    let set = parse_preview_set(&body).expect("previews");
    let preview = set.preview(77, 0).expect("first tile");

    assert_eq!(preview.image_key, "preview:normal:cm:77-1");
    assert!(is_normal_preview_key(&preview.image_key));
}
