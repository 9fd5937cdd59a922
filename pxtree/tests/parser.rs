use pxtree::{Color, Error, IntRect, Point, Shape, Tree};

fn polygon_points(shape: &Shape) -> &[Point] {
    match shape {
        Shape::Polygon(ref p) => p.points(),
        Shape::Rect(ref r) => r.as_polygon().points(),
        _ => unreachable!(),
    }
}

#[test]
fn size_from_root() {
    let svg = "<svg width='30' height='40' xmlns='http://www.w3.org/2000/svg'/>";
    let tree = Tree::from_str(svg).unwrap();
    assert_eq!(tree.size.dimensions(), (30, 40));
    assert!(tree.root.is_empty());
}

#[test]
fn invalid_size_1() {
    let svg = "<svg width='0' height='10' xmlns='http://www.w3.org/2000/svg'/>";
    assert!(matches!(Tree::from_str(svg), Err(Error::InvalidSize)));
}

#[test]
fn invalid_size_2() {
    let svg = "<svg xmlns='http://www.w3.org/2000/svg'/>";
    assert!(matches!(Tree::from_str(svg), Err(Error::InvalidSize)));
}

#[test]
fn malformed_xml() {
    let svg = "<svg width='10' height='10'><rect></svg>";
    assert!(matches!(Tree::from_str(svg), Err(Error::ParsingFailed(_))));
}

#[test]
fn not_utf8() {
    assert!(matches!(
        Tree::from_data(&[0x3c, 0xff, 0xfe]),
        Err(Error::NotAnUtf8Str)
    ));
}

#[test]
fn all_shapes() {
    let svg = "
    <svg width='100' height='100' xmlns='http://www.w3.org/2000/svg'>
        <ellipse cx='10' cy='20' rx='3' ry='4' fill='red'/>
        <circle cx='5' cy='5' r='2' fill='#00FF00'/>
        <line x1='0' y1='1' x2='8' y2='9' stroke='blue'/>
        <polyline points='0,0 5,5 10,0' stroke='black'/>
        <polygon points='0,0 4,0 0,4' fill='yellow'/>
        <rect x='1' y='2' width='3' height='4' fill='white'/>
        <g/>
    </svg>
    ";

    let tree = Tree::from_str(svg).unwrap();
    assert_eq!(tree.root.len(), 7);

    match tree.root[0] {
        Shape::Ellipse(ref e) => {
            assert_eq!(e.center(), Point::new(10, 20));
            assert_eq!(e.radius(), Point::new(3, 4));
            assert_eq!(e.color(), Color::new_rgb(255, 0, 0));
        }
        _ => unreachable!(),
    }

    match tree.root[1] {
        Shape::Circle(ref c) => {
            assert_eq!(c.as_ellipse().center(), Point::new(5, 5));
            assert_eq!(c.radius(), 2);
            assert_eq!(c.as_ellipse().color(), Color::new_rgb(0, 255, 0));
        }
        _ => unreachable!(),
    }

    match tree.root[2] {
        Shape::Line(ref l) => {
            assert_eq!(l.start(), Point::new(0, 1));
            assert_eq!(l.end(), Point::new(8, 9));
        }
        _ => unreachable!(),
    }

    match tree.root[3] {
        Shape::Polyline(ref p) => assert_eq!(p.points().len(), 3),
        _ => unreachable!(),
    }

    assert!(matches!(tree.root[4], Shape::Polygon(_)));
    assert_eq!(
        polygon_points(&tree.root[5]),
        &[
            Point::new(1, 2),
            Point::new(3, 2),
            Point::new(3, 5),
            Point::new(1, 5)
        ]
    );

    match tree.root[6] {
        Shape::Group(ref g) => {
            assert!(g.children().is_empty());
            assert_eq!(g.color(), Color::white());
        }
        _ => unreachable!(),
    }
}

#[test]
fn unknown_elements_are_skipped() {
    let svg = "
    <svg width='10' height='10' xmlns='http://www.w3.org/2000/svg'>
        <path d='M 0 0 L 5 5'/>
        <rect width='2' height='2' fill='red'/>
        <text>hello</text>
        <svg width='2' height='2'/>
    </svg>
    ";

    let tree = Tree::from_str(svg).unwrap();
    assert_eq!(tree.root.len(), 1);
    assert!(matches!(tree.root[0], Shape::Rect(_)));
}

#[test]
fn unknown_color_is_fatal() {
    let svg = "
    <svg width='10' height='10' xmlns='http://www.w3.org/2000/svg'>
        <rect width='2' height='2' fill='red'/>
        <rect width='2' height='2' fill='purple'/>
    </svg>
    ";

    match Tree::from_str(svg) {
        Err(Error::UnknownColor(ref name)) => assert_eq!(name, "purple"),
        _ => unreachable!(),
    }
}

#[test]
fn unknown_color_inside_group_is_fatal() {
    let svg = "
    <svg width='10' height='10' xmlns='http://www.w3.org/2000/svg'>
        <g><g><circle r='1' fill='#12'/></g></g>
    </svg>
    ";

    assert!(matches!(Tree::from_str(svg), Err(Error::InvalidColor(_))));
}

#[test]
fn missing_fill_is_black() {
    let svg = "
    <svg width='10' height='10' xmlns='http://www.w3.org/2000/svg'>
        <rect width='2' height='2'/>
    </svg>
    ";

    let tree = Tree::from_str(svg).unwrap();
    assert_eq!(tree.root[0].color(), Color::black());
}

#[test]
fn translate_transform() {
    let svg = "
    <svg width='10' height='10' xmlns='http://www.w3.org/2000/svg'>
        <rect width='2' height='2' fill='red' transform='translate(3, 4)'/>
        <rect width='2' height='2' fill='red' transform='translate(3)'/>
    </svg>
    ";

    let tree = Tree::from_str(svg).unwrap();
    assert_eq!(polygon_points(&tree.root[0])[0], Point::new(3, 4));
    assert_eq!(polygon_points(&tree.root[1])[0], Point::new(3, 0));
}

#[test]
fn scale_transform_with_origin() {
    let svg = "
    <svg width='10' height='10' xmlns='http://www.w3.org/2000/svg'>
        <ellipse cx='3' cy='3' rx='1' ry='2' fill='red'
                 transform='scale(2)' transform-origin='1 1'/>
    </svg>
    ";

    let tree = Tree::from_str(svg).unwrap();
    match tree.root[0] {
        Shape::Ellipse(ref e) => {
            assert_eq!(e.center(), Point::new(5, 5));
            assert_eq!(e.radius(), Point::new(2, 4));
        }
        _ => unreachable!(),
    }
}

#[test]
fn rotate_transform() {
    let svg = "
    <svg width='10' height='10' xmlns='http://www.w3.org/2000/svg'>
        <line x1='0' y1='0' x2='4' y2='0' stroke='red' transform='rotate(90)'/>
        <line x1='5' y1='5' x2='9' y2='5' stroke='red'
              transform='rotate(90)' transform-origin='5 5'/>
        <line x1='5' y1='5' x2='9' y2='5' stroke='red' transform='rotate(180 5 5)'/>
    </svg>
    ";

    let tree = Tree::from_str(svg).unwrap();
    let ends: Vec<_> = tree
        .root
        .iter()
        .map(|s| match s {
            Shape::Line(ref l) => (l.start(), l.end()),
            _ => unreachable!(),
        })
        .collect();

    assert_eq!(ends[0], (Point::new(0, 0), Point::new(0, 4)));
    assert_eq!(ends[1], (Point::new(5, 5), Point::new(5, 9)));
    assert_eq!(ends[2], (Point::new(5, 5), Point::new(1, 5)));
}

#[test]
fn unknown_transform_is_ignored() {
    let svg = "
    <svg width='10' height='10' xmlns='http://www.w3.org/2000/svg'>
        <rect x='1' y='1' width='2' height='2' fill='red' transform='skewX(30)'/>
        <rect x='1' y='1' width='2' height='2' fill='red' transform='spin(30)'/>
        <rect x='1' y='1' width='2' height='2' fill='red' transform='matrix(1 0 0 1 5 5)'/>
    </svg>
    ";

    let tree = Tree::from_str(svg).unwrap();
    assert_eq!(tree.root.len(), 3);
    for shape in &tree.root {
        assert_eq!(polygon_points(shape)[0], Point::new(1, 1));
    }
}

#[test]
fn only_first_transform_is_applied() {
    let svg = "
    <svg width='10' height='10' xmlns='http://www.w3.org/2000/svg'>
        <rect width='2' height='2' fill='red' transform='translate(1 1) translate(5 5)'/>
        <rect width='2' height='2' fill='red' transform='translate(2 2) foo(5)'/>
    </svg>
    ";

    let tree = Tree::from_str(svg).unwrap();
    assert_eq!(polygon_points(&tree.root[0])[0], Point::new(1, 1));
    assert_eq!(polygon_points(&tree.root[1])[0], Point::new(2, 2));
}

#[test]
fn group_transform_applies_to_children() {
    let svg = "
    <svg width='10' height='10' xmlns='http://www.w3.org/2000/svg'>
        <g transform='translate(2, 3)'>
            <rect width='2' height='2' fill='red'/>
            <g transform='translate(1, 1)'>
                <circle cx='0' cy='0' r='1' fill='blue'/>
            </g>
        </g>
    </svg>
    ";

    let tree = Tree::from_str(svg).unwrap();
    let group = match tree.root[0] {
        Shape::Group(ref g) => g,
        _ => unreachable!(),
    };

    assert_eq!(polygon_points(&group.children()[0])[0], Point::new(2, 3));
    match group.children()[1] {
        Shape::Group(ref inner) => match inner.children()[0] {
            Shape::Circle(ref c) => assert_eq!(c.as_ellipse().center(), Point::new(3, 4)),
            _ => unreachable!(),
        },
        _ => unreachable!(),
    }
}

#[test]
fn huge_scale_saturates() {
    let svg = "
    <svg width='10' height='10' xmlns='http://www.w3.org/2000/svg'>
        <circle cx='70000' r='1' fill='red' transform='scale(70000)'/>
        <circle cx='-70000' cy='5' r='1' fill='red' transform='scale(70000)'/>
    </svg>
    ";

    let tree = Tree::from_str(svg).unwrap();
    match tree.root[0] {
        Shape::Circle(ref c) => {
            assert_eq!(c.as_ellipse().center(), Point::new(i32::MAX, 0));
            assert_eq!(c.radius(), 70000);
        }
        _ => unreachable!(),
    }
    match tree.root[1] {
        Shape::Circle(ref c) => {
            assert_eq!(c.as_ellipse().center(), Point::new(i32::MIN, 350000));
        }
        _ => unreachable!(),
    }
}

#[test]
fn rect_at_coordinate_limit() {
    let svg = "
    <svg width='10' height='10' xmlns='http://www.w3.org/2000/svg'>
        <rect x='2147483000' width='5000' height='2' fill='red'/>
        <rect x='5' y='2147483000' width='2' height='5000' fill='red'/>
    </svg>
    ";

    let tree = Tree::from_str(svg).unwrap();
    assert_eq!(polygon_points(&tree.root[0])[1], Point::new(i32::MAX, 0));
    assert_eq!(polygon_points(&tree.root[0])[2], Point::new(i32::MAX, 1));
    assert_eq!(polygon_points(&tree.root[1])[2], Point::new(6, i32::MAX));
    assert_eq!(
        tree.root[0].bounding_box(),
        IntRect::from_ltrb(2147483000, 0, i32::MAX, 1)
    );
}

#[test]
fn use_before_declaration_fails() {
    let svg = "
    <svg width='10' height='10' xmlns='http://www.w3.org/2000/svg'>
        <use href='#a'/>
        <rect id='a' width='2' height='2' fill='red'/>
    </svg>
    ";

    match Tree::from_str(svg) {
        Err(Error::UnresolvedReference(ref href)) => assert_eq!(href, "#a"),
        _ => unreachable!(),
    }
}

#[test]
fn use_without_href_fails() {
    let svg = "
    <svg width='10' height='10' xmlns='http://www.w3.org/2000/svg'>
        <rect id='a' width='2' height='2' fill='red'/>
        <use/>
    </svg>
    ";

    assert!(matches!(
        Tree::from_str(svg),
        Err(Error::UnresolvedReference(_))
    ));
}

#[test]
fn use_after_declaration() {
    let svg = "
    <svg width='10' height='10' xmlns='http://www.w3.org/2000/svg'>
        <rect id='a' x='1' y='1' width='2' height='2' fill='red'/>
        <use href='#a'/>
        <use href='a' transform='translate(5, 0)'/>
    </svg>
    ";

    let tree = Tree::from_str(svg).unwrap();
    assert_eq!(tree.root.len(), 3);
    assert!(matches!(tree.root[1], Shape::Rect(_)));
    assert_eq!(polygon_points(&tree.root[1]), polygon_points(&tree.root[0]));
    assert_eq!(polygon_points(&tree.root[2])[0], Point::new(6, 1));
    // The original is not affected by the transform of the copy.
    assert_eq!(polygon_points(&tree.root[0])[0], Point::new(1, 1));
}

#[test]
fn use_with_xlink_href() {
    let svg = "
    <svg width='10' height='10' xmlns='http://www.w3.org/2000/svg'
         xmlns:xlink='http://www.w3.org/1999/xlink'>
        <circle id='c' cx='2' cy='2' r='1' fill='red'/>
        <use xlink:href='#c'/>
    </svg>
    ";

    let tree = Tree::from_str(svg).unwrap();
    assert!(matches!(tree.root[1], Shape::Circle(_)));
}

#[test]
fn use_sees_transformed_source() {
    let svg = "
    <svg width='10' height='10' xmlns='http://www.w3.org/2000/svg'>
        <rect id='a' width='2' height='2' fill='red' transform='translate(4, 4)'/>
        <use href='#a'/>
    </svg>
    ";

    let tree = Tree::from_str(svg).unwrap();
    assert_eq!(polygon_points(&tree.root[1])[0], Point::new(4, 4));
}

#[test]
fn use_of_group_is_deep_copy() {
    let svg = "
    <svg width='20' height='20' xmlns='http://www.w3.org/2000/svg'>
        <g id='pair'>
            <rect width='2' height='2' fill='red'/>
            <circle cx='5' cy='5' r='1' fill='blue'/>
        </g>
        <use href='#pair' transform='translate(10, 0)'/>
    </svg>
    ";

    let tree = Tree::from_str(svg).unwrap();
    let (a, b) = match (&tree.root[0], &tree.root[1]) {
        (Shape::Group(ref a), Shape::Group(ref b)) => (a, b),
        _ => unreachable!(),
    };

    assert_eq!(a.children().len(), 2);
    assert_eq!(b.children().len(), 2);
    assert_eq!(polygon_points(&a.children()[0])[0], Point::new(0, 0));
    assert_eq!(polygon_points(&b.children()[0])[0], Point::new(10, 0));
}

#[test]
fn use_inside_group_references_sibling() {
    let svg = "
    <svg width='20' height='20' xmlns='http://www.w3.org/2000/svg'>
        <g transform='translate(1, 0)'>
            <rect id='a' width='2' height='2' fill='red'/>
            <use href='#a' transform='translate(0, 5)'/>
        </g>
        <use href='#a'/>
    </svg>
    ";

    let tree = Tree::from_str(svg).unwrap();
    let group = match tree.root[0] {
        Shape::Group(ref g) => g,
        _ => unreachable!(),
    };

    // The sibling copy was made before the group was translated.
    assert_eq!(polygon_points(&group.children()[1])[0], Point::new(1, 5));
    // The top-level copy sees the translated group child.
    assert_eq!(polygon_points(&tree.root[1])[0], Point::new(1, 0));
}

#[test]
fn group_cannot_reference_itself() {
    let svg = "
    <svg width='20' height='20' xmlns='http://www.w3.org/2000/svg'>
        <g id='self'>
            <use href='#self'/>
        </g>
    </svg>
    ";

    assert!(matches!(
        Tree::from_str(svg),
        Err(Error::UnresolvedReference(_))
    ));
}

#[test]
fn chained_use() {
    let svg = "
    <svg width='20' height='20' xmlns='http://www.w3.org/2000/svg'>
        <circle id='c' cx='2' cy='2' r='1' fill='red'/>
        <use id='u1' href='#c' transform='translate(3, 0)'/>
        <use href='#u1' transform='translate(3, 0)'/>
    </svg>
    ";

    let tree = Tree::from_str(svg).unwrap();
    assert_eq!(tree.root.len(), 3);
    match tree.root[2] {
        Shape::Circle(ref c) => assert_eq!(c.as_ellipse().center(), Point::new(8, 2)),
        _ => unreachable!(),
    }
    assert_eq!(tree.root[1].id(), "u1");
    assert_eq!(tree.root[2].id(), "");
}

#[test]
fn use_id_is_reference_only() {
    let svg = "
    <svg width='20' height='20' xmlns='http://www.w3.org/2000/svg'>
        <circle id='c' cx='2' cy='2' r='1' fill='red'/>
        <use id='u1' href='#c'/>
        <use href='u1'/>
    </svg>
    ";

    assert!(matches!(
        Tree::from_str(svg),
        Err(Error::UnresolvedReference(_))
    ));
}

#[test]
fn node_by_id() {
    let svg = "
    <svg width='20' height='20' xmlns='http://www.w3.org/2000/svg'>
        <g id='outer'>
            <rect id='inner' x='2' y='3' width='4' height='5' fill='red'/>
        </g>
    </svg>
    ";

    let tree = Tree::from_str(svg).unwrap();
    let inner = tree.node_by_id("inner").unwrap();
    assert_eq!(inner.bounding_box(), IntRect::from_xywh(2, 3, 4, 5));
    assert!(matches!(tree.node_by_id("outer"), Some(Shape::Group(_))));
    assert!(tree.node_by_id("missing").is_none());
    assert!(tree.node_by_id("").is_none());
}
