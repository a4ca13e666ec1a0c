//! Short facts and key events per division, for the exploration panel.

pub const DEFAULT_FACTS: &[&str] = &[
    "No specific facts available for this period.",
    "This time period is still being studied by geologists.",
];

/// Facts for `id`, or [`DEFAULT_FACTS`] when none are recorded.
pub fn facts_for(id: &str) -> &'static [&'static str] {
    match id {
        "hadean" => &[
            "Named after Hades, for the hellish conditions on the early Earth.",
            "The Moon likely formed after a Mars-sized body struck the Earth.",
        ],
        "archaean" => &[
            "The first evidence of life appears, around 3.5 billion years ago.",
            "The atmosphere had no free oxygen and was rich in methane.",
        ],
        "proterozoic" => &[
            "The name means 'earlier life'.",
            "Oxygen began to accumulate in the atmosphere.",
        ],
        "phanerozoic" => &[
            "The name means 'visible life'.",
            "Spans from 541 million years ago to the present.",
        ],
        "paleozoic" => &[
            "The name means 'ancient life'.",
            "Ended with the largest mass extinction in Earth's history.",
        ],
        "mesozoic" => &[
            "Often called the 'Age of Dinosaurs'.",
            "Pangaea began to break apart.",
        ],
        "cenozoic" => &[
            "The name means 'recent life'.",
            "Often called the 'Age of Mammals'.",
        ],
        "cambrian" => &[
            "Most major animal phyla appear in the Cambrian explosion.",
            "Trilobites were among the most successful animals.",
        ],
        "ordovician" => &[
            "The first vertebrates, jawless fish, appear.",
            "The first land plants appear.",
        ],
        "silurian" => &[
            "The first jawed fish appear.",
            "Vascular plants spread across the land.",
        ],
        "devonian" => &[
            "Often called the 'Age of Fishes'.",
            "The first forests and the first tetrapods appear.",
        ],
        "carboniferous" => &[
            "Named for the vast coal deposits formed at the time.",
            "Giant insects thrived on high oxygen levels.",
        ],
        "permian" => &[
            "The continents joined into the supercontinent Pangaea.",
            "Ended with the Great Dying.",
        ],
        "triassic" => &[
            "The first dinosaurs and the first true mammals evolve.",
        ],
        "jurassic" => &[
            "Named after the Jura Mountains in Europe.",
            "The first birds evolve from small theropod dinosaurs.",
        ],
        "cretaceous" => &[
            "The first flowering plants appear.",
            "Ended with the asteroid impact that killed the non-avian dinosaurs.",
        ],
        "paleogene" => &["Mammals diversify after the extinction of the dinosaurs."],
        "neogene" => &["Grasslands expand and hominids evolve in Africa."],
        "quaternary" => &["Characterized by repeated glaciations."],
        "paleocene" => &["Mammals move into the niches left by the dinosaurs."],
        "eocene" => &["The warmest epoch of the Cenozoic."],
        "oligocene" => &["Global cooling begins and grasslands expand."],
        "miocene" => &["The Mediterranean dried up repeatedly in the Messinian crisis."],
        "pliocene" => &["The Isthmus of Panama joins North and South America."],
        "pleistocene" => &["Mammoths and giant sloths roam during the ice ages."],
        "holocene" => &["Human civilization develops after the last ice age."],
        "schmolocene" => &[
            "A hypothetical future epoch in which humanity becomes a geological steward.",
        ],
        _ => DEFAULT_FACTS,
    }
}

/// Key events during `id`; empty when none are recorded.
pub fn key_events(id: &str) -> &'static [&'static str] {
    match id {
        "cambrian" => &["Cambrian Explosion", "First hard-shelled animals"],
        "ordovician" => &[
            "First plants colonize land",
            "Ordovician-Silurian extinction event",
        ],
        "permian" => &["Formation of Pangaea", "End-Permian extinction"],
        "triassic" => &["First dinosaurs", "First mammals", "Breakup of Pangaea begins"],
        "jurassic" => &["Golden age of dinosaurs", "First birds"],
        "cretaceous" => &["First flowering plants", "Chicxulub impact and K-Pg extinction"],
        "paleogene" => &["Diversification of mammals", "Alps and Himalayas begin to rise"],
        "neogene" => &["Early hominids", "Formation of the Isthmus of Panama"],
        "pleistocene" => &["Glacial and interglacial cycles", "Spread of Homo species"],
        "holocene" => &["End of the last ice age", "Rise of agriculture"],
        _ => &[],
    }
}
