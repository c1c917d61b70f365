/*!

This is the long-form manual for `candidate_grouping` and `candgroup`.

## Grouping strategies

The strategy only depends on which search facets are set (a facet set to blank
text counts as not set). The facets are: free text `search`, `state`,
`electionType` and `party`.

| facets set                                 | strategy                                      |
|--------------------------------------------|-----------------------------------------------|
| none                                       | `none`: nothing is shown                      |
| `electionType` alone                       | `byState`, or `byStateAndDistrict` (1)        |
| `state`, `party` or `search` alone         | `byElectionType`                              |
| `electionType` and `state`                 | `byDistrict`                                  |
| `electionType` and `party`                 | `byState`, or `byStateAndDistrict` (1)        |
| `electionType` and `search`                | `byState`, or `byStateAndDistrict` (1)        |
| any other pair                             | `byElectionType`                              |
| three or four facets                       | `flatList`                                    |

(1) when the election type is district-scoped. Out of the box, only
`Congressional` is.

### `byElectionType`

One section per election type, in ballot order: `Presidential`, `Senate`,
`Gubernatorial`, `Congressional`, `State Legislature`, `Local`, then any other
type alphabetically. Elections without a type are listed under `Other`.

District-scoped types get one more level: the section holds every candidate of
that type (for counting) and its sub sections are built as with
`byStateAndDistrict`.

### `byState`

One section per state, labeled `California - CA`. States are sorted by full
name, whether the directory gave the name or the abbreviation. Elections
without a state are listed under `Unknown State`.

### `byDistrict`

One section per district, labeled `District 12`. Numbered districts are sorted
as numbers and come before any other district code. Elections without a district are listed under `District At-Large`.

### `byStateAndDistrict`

One section per state and district, labeled `California - CA - District 12`.

### `flatList`

A single `All Candidates` section.

Inside a section, candidates are sorted by last name then first name. The
`electionType` sort mode sorts them by election type instead. The `state` sort
mode is accepted for compatibility and behaves as `electionType`; use
`resolvedState` to actually sort by state.

## Input format

`candgroup` reads the candidate list as returned by the candidate directory,
either as a plain JSON array or as a page (`{"count": 12, "results": [...]}`):

```text
[
  {
    "id": 12,
    "firstName": "Ana",
    "lastName": "Nguyen",
    "party": {"name": "Democratic"},
    "election": {
      "electionType": {"name": "Congressional"},
      "electionCycle": {"year": 2024, "date": "2024-11-05"},
      "geographyScopes": [
        {"scopeType": "STATE", "scopeId": "CA"},
        {"scopeType": "DISTRICT", "scopeId": "12"}
      ]
    }
  }
]
```

`party` may be null (the candidate is then listed as `Independent`). The scope
types are `NATIONAL`, `STATE`, `COUNTY`, `CITY` and `DISTRICT`.

## Configuration

All the options can be given on the command line. They can also be stored in
a JSON file passed with `--config`. Options given on the command line take
precedence.

```text
{
  "candidateFile": "candidates.json",
  "facets": {"electionType": "Congressional", "party": "Green"},
  "sortBy": "name",
  "districtScopedTypes": ["Congressional"],
  "typePriority": ["Presidential", "Senate", "Gubernatorial", "Congressional", "State Legislature", "Local"],
  "collapsed": ["California - CA - District 12"]
}
```

- `candidateFile` (string, optional): relative to the configuration file.
- `sortBy` (string, optional): `name` (default), `electionType`, `state` or
  `resolvedState`.
- `districtScopedTypes`, `typePriority` (arrays of strings, optional): replace
  the defaults above.
- `collapsed` (array of strings, optional): the labels of the sections shown as
  collapsed. Labels that match no section are ignored.

## Output format

```text
{
  "strategy": "byStateAndDistrict",
  "groups": [
    {
      "label": "California - CA - District 12",
      "count": 1,
      "collapsed": false,
      "candidates": [
        {"id": 12, "name": "Ana Nguyen", "party": "Democratic",
         "electionType": "Congressional", "state": "CA", "district": "12"}
      ]
    }
  ]
}
```

Sections with sub sections also have a `subGroups` array.

 */
