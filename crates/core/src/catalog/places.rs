use crate::model::Place;

pub(super) static PLACES: &[Place] = &[
    Place::new(
        "basel-minster",
        "Basel Minster",
        "47.5859° N, 7.5890° E",
        47.5859,
        7.589,
        "Basel Minster (Münster) is one of the city’s most famous landmarks, built \
        between the 11th and 15th centuries in Romanesque and Gothic styles. Its twin \
        towers and red-sandstone facade form a classic panorama over the Rhine. Inside \
        you’ll find stained glass and artworks, while the crypt holds the tombs of local \
        bishops. Climbing the tower rewards you with wide views of Basel and the river, \
        making it a must-see for first-time visitors.",
    )
    .with_fact(
        "Part of the cathedral roof is covered with original medieval tiles that have not \
        been changed for centuries.",
    ),
    Place::new(
        "basel-town-hall",
        "Basel Town Hall",
        "47.5470° N, 7.5886° E",
        47.547,
        7.5886,
        "Basel Town Hall is a striking late-Gothic and Renaissance landmark on \
        Marktplatz. Its bright red facade, ornate details, and painted courtyard are \
        among the most photogenic scenes in the city. The building remains the seat of \
        the cantonal government, blending a historical exterior with modern civic life. \
        Step inside the courtyard to see frescoes, symbols, and architectural layers \
        from different periods.",
    )
    .with_fact(
        "In the courtyard of the town hall, you can find frescoes that were created over \
        several centuries by different artists.",
    ),
    Place::new(
        "mittlere-bruecke",
        "Mittlere Brücke (Middle Bridge)",
        "47.5747° N, 7.5875° E",
        47.5747,
        7.5875,
        "Mittlere Brücke is one of the oldest Rhine crossings in Switzerland. The \
        original bridge dates back to 1225, while today’s stone structure reflects later \
        reconstruction. It connects Grossbasel and Kleinbasel and offers postcard-like \
        views of the old town and cathedral. Locals come here for evening walks, photos, \
        and the feeling of Basel’s rhythm flowing with the river.",
    )
    .with_fact(
        "This is where one of the first bridges across the Rhine in the region was \
        located back in the 13th century.",
    ),
    Place::new(
        "tinguely-fountain",
        "Tinguely Fountain",
        "47.5449° N, 7.5880° E",
        47.5449,
        7.588,
        "The Tinguely Fountain is a kinetic artwork by Swiss artist Jean Tinguely. \
        Mechanical sculptures move, splash, and animate the water with playful energy. \
        Located near Theaterplatz, it’s both a meeting point and a calm spot to watch \
        motion and reflections. The fountain is especially atmospheric in the evening \
        when the city lights enhance the metal forms.",
    )
    .with_fact(
        "The fountain was created from scrap metal from an old theater that used to stand \
        on the same site.",
    ),
    Place::new(
        "spalentor",
        "Spalentor (Spalen Gate)",
        "47.5535° N, 7.5837° E",
        47.5535,
        7.5837,
        "Spalentor is one of Basel’s most impressive medieval gates, built in the late \
        14th century. Once part of the defensive walls, it still feels monumental with \
        its main tower and side turrets. Decorative elements and coats of arms reflect \
        Basel’s former importance as a trading center. Today, it’s a memorable photo \
        spot and a gateway into the atmosphere of the old city.",
    )
    .with_fact(
        "This is one of the few city gates in Basel that has survived almost unchanged \
        since the Middle Ages.",
    ),
    Place::new(
        "botanical-garden",
        "Botanical Garden (University of Basel)",
        "47.5581° N, 7.5878° E",
        47.5581,
        7.5878,
        "The Botanical Garden of the University of Basel is one of the oldest in \
        Switzerland. It hosts plants from multiple climate zones, with quiet paths, \
        greenhouses, and rare species collections. It’s a peaceful break from city \
        streets and a place to observe details: textures of leaves, unusual blooms, and \
        tiny ecosystems. Perfect for a slow walk and a calm reset.",
    )
    .with_fact(
        "The garden has been used not only for walks, but also for scientific research \
        for over 400 years.",
    ),
    Place::new(
        "zoo-basel",
        "Zoo Basel",
        "47.5624° N, 7.5886° E",
        47.5624,
        7.5886,
        "Basel Zoo is one of the oldest and most respected zoos in Switzerland. It offers \
        a broad collection of animals and carefully designed habitats within a compact, \
        walkable space. Families and visitors come for close encounters with wildlife \
        and a well-organized route. It’s a classic Basel destination that combines \
        learning, nature, and relaxed city leisure.",
    )
    .with_fact(
        "The zoo was the first in the world to successfully breed Indian rhinos in \
        captivity.",
    ),
    Place::new(
        "kunstmuseum",
        "Kunstmuseum Basel",
        "47.5585° N, 7.5885° E",
        47.5585,
        7.5885,
        "Kunstmuseum Basel is among Europe’s leading art museums, with a collection \
        spanning early painting to modern masterpieces. Works by major artists are \
        presented in a calm, curated flow that avoids overload. The museum highlights \
        Basel’s strong cultural identity and its long relationship with art and \
        collecting. Ideal for a focused visit and a deeper city experience.",
    )
    .with_fact(
        "The museum's collection is considered the oldest public art collection in the \
        world.",
    ),
    Place::new(
        "old-town",
        "Old Town (Altstadt)",
        "47.5580° N, 7.5870° E",
        47.558,
        7.587,
        "Basel’s Old Town is a maze of cobblestone streets, historic facades, quiet \
        squares, and small fountains. Many corners feel unchanged for centuries, yet the \
        area is alive with cafés and local routines. This is where you feel the city’s \
        layers: medieval forms, Renaissance details, and modern life in between. Slow \
        walking here reveals the most.",
    )
    .with_fact(
        "The old town has over 300 historic fountains, most of which are still in use.",
    ),
    Place::new(
        "roche-tower",
        "Roche Tower",
        "47.5726° N, 7.5889° E",
        47.5726,
        7.5889,
        "Roche Tower is the tallest building in Switzerland and a symbol of modern Basel. \
        Its strict silhouette contrasts with the old town, showing how the city balances \
        heritage with innovation. The tower anchors a newer business area near the \
        Rhine, where urban development feels contemporary and clean. It’s a strong \
        visual landmark from many viewpoints.",
    )
    .with_fact(
        "The building caused a lot of controversy even before construction began due to \
        its height and modern appearance.",
    ),
    Place::new(
        "fondation-beyeler",
        "Fondation Beyeler",
        "47.5886° N, 7.6586° E",
        47.5886,
        7.6586,
        "Fondation Beyeler in nearby Riehen is a world-renowned modern art museum. \
        Designed by Renzo Piano, the building uses natural light and a calm layout so \
        visitors can focus on the artwork. The collection includes iconic 20th-century \
        artists and rotating exhibitions. The surrounding landscape adds a quiet, \
        refined atmosphere to the visit.",
    )
    .with_fact(
        "The museum often changes its exhibitions so that the art interacts with the \
        seasons outside.",
    ),
    Place::new(
        "elisabethenkirche",
        "Elisabethenkirche",
        "47.5516° N, 7.5906° E",
        47.5516,
        7.5906,
        "Elisabethenkirche is a neo-Gothic church with steep forms and dark stone, \
        standing out sharply in the city center. Built in the 19th century, it brings \
        vertical lines and stained glass into a dense urban setting. Inside, the space \
        feels restrained and calm, often used not only for worship but also for concerts \
        and cultural events. It’s a quiet point in the middle of movement.",
    )
    .with_fact(
        "The church is often used as an open cultural space, not just as a sacred \
        building.",
    ),
    Place::new(
        "marktplatz",
        "Marktplatz",
        "47.5472° N, 7.5887° E",
        47.5472,
        7.5887,
        "Marktplatz is Basel’s central square and a daily living space, not just a \
        tourist scene. Markets sell flowers, fruit, cheese, and local produce, while \
        trams and people cross through in steady rhythm. Surrounded by important \
        buildings like the Town Hall, the square is a natural hub for exploring the old \
        town and feeling the city’s pace.",
    )
    .with_fact(
        "The market on the square is open almost every day and remains the main shopping \
        destination for locals.",
    ),
    Place::new(
        "paper-mill-museum",
        "Basel Paper Mill Museum",
        "47.5609° N, 7.5993° E",
        47.5609,
        7.5993,
        "The Paper and Printing Museum shows Basel’s role in education, publishing, and \
        craft traditions. Historic presses, workshops, and tools reveal how books and \
        prints were created long before the digital era. The museum is interactive, \
        letting visitors try hands-on processes and understand the patience behind old \
        techniques. A great place to see the intellectual side of Basel.",
    )
    .with_fact(
        "The museum still produces paper by hand using traditional medieval techniques.",
    ),
    Place::new(
        "vitra-campus",
        "Vitra Campus",
        "47.5946° N, 7.6102° E",
        47.5946,
        7.6102,
        "Vitra Campus is an architectural destination where buildings by renowned \
        architects are gathered in one area. It feels like an open-air museum of modern \
        design—each structure with its own philosophy and mood. Walking through the \
        campus is like moving between ideas and materials. Ideal for architecture lovers \
        and photographers.",
    )
    .with_fact(
        "Each building on the campus was designed by a different world-famous architect.",
    ),
    Place::new(
        "rhine-promenade",
        "Rhine Promenade",
        "47.5660° N, 7.5900° E",
        47.566,
        7.59,
        "The Rhine Promenade is one of the most loved everyday places in Basel. People \
        walk, sit by the water, exercise, and meet friends. In summer, the river becomes \
        part of daily life when locals float downstream. The promenade shows Basel as it \
        truly is—calm, practical, and connected to the Rhine.",
    )
    .with_fact(
        "In the summer, Basel residents swim en masse on the Rhine, using special \
        waterproof bags.",
    ),
    Place::new(
        "museum-tinguely",
        "Museum Tinguely",
        "47.5636° N, 7.6020° E",
        47.5636,
        7.602,
        "Museum Tinguely is dedicated to kinetic art and the works of Jean Tinguely. \
        Exhibits often move, make sound, and interact with space, breaking the \
        traditional idea of static museum silence. The building sits near the Rhine, \
        adding a reflective, modern atmosphere. It’s a memorable experience even for \
        those new to contemporary art.",
    )
    .with_fact(
        "Some exhibits are specially designed to make noise and move chaotically.",
    ),
    Place::new(
        "three-countries-bridge",
        "Three Countries Bridge",
        "47.5930° N, 7.5910° E",
        47.593,
        7.591,
        "The Three Countries Bridge (Dreiländerbrücke) is a modern pedestrian bridge \
        linking the border region near Basel. Its elegant curve and open views make it a \
        symbolic place of connection—between Switzerland, France, and Germany. Walking \
        here feels spacious and calm, with the Rhine below and the skyline in the \
        distance. Great for photos and sunset walks.",
    )
    .with_fact(
        "Walking across the bridge, you can visit three countries in a few minutes.",
    ),
    Place::new(
        "basel-university",
        "University of Basel",
        "47.5592° N, 7.5882° E",
        47.5592,
        7.5882,
        "Founded in 1460, the University of Basel is Switzerland’s oldest university and \
        a core part of the city’s identity. Its presence is felt through historic \
        courtyards, libraries, and a steady student rhythm. The university connects \
        Basel’s old intellectual tradition with modern research and innovation. A quiet \
        walk around the area shows a different, thoughtful Basel.",
    ),
    Place::new(
        "st-alban",
        "St. Alban District",
        "47.5548° N, 7.6032° E",
        47.5548,
        7.6032,
        "St. Alban is a charming historic district known for calm streets, old stone \
        details, and a quieter atmosphere than the central squares. It’s a place for \
        slow exploration—small bridges, water, and hidden corners. The area feels \
        residential and authentic, showing Basel beyond the main tourist route. Perfect \
        for a peaceful walk with a camera.",
    )
    .with_fact(
        "The district has earned the nickname \"Little Venice\" due to its system of water \
        canals and mills.",
    ),
];
